//! Todo Item Component
//!
//! A single todo row with in-place title editing.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Todo;

/// Local edit state of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing,
    /// Edit submitted, waiting for the server
    Saving,
}

/// What submitting an edited title does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Same title: leave edit mode, no request
    Unchanged,
    /// Blank title: delete the todo
    Delete(u32),
    /// New title: update the todo
    Rename(Todo),
}

/// Input to the row's edit state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// Double-click on the title
    Start,
    /// Form submit or blur, with the current draft
    Submit(String),
    /// Escape key
    Cancel,
    /// The request sent for a submit has settled
    Settled { ok: bool },
}

pub fn resolve_edit(todo: &Todo, draft: &str) -> EditOutcome {
    let title = draft.trim();
    if title == todo.title.trim() {
        EditOutcome::Unchanged
    } else if title.is_empty() {
        EditOutcome::Delete(todo.id)
    } else {
        EditOutcome::Rename(todo.with_title(title))
    }
}

/// Next edit state, plus the request to send if any.
///
/// Events that don't apply to the current state leave it as is, so a blur
/// arriving after a submit resolves nothing.
pub fn on_edit_event(state: EditState, todo: &Todo, event: EditEvent) -> (EditState, Option<EditOutcome>) {
    match (state, event) {
        (EditState::Viewing, EditEvent::Start) => (EditState::Editing, None),
        (EditState::Editing, EditEvent::Submit(draft)) => match resolve_edit(todo, &draft) {
            EditOutcome::Unchanged => (EditState::Viewing, None),
            request => (EditState::Saving, Some(request)),
        },
        (EditState::Editing, EditEvent::Cancel) => (EditState::Viewing, None),
        (EditState::Saving, EditEvent::Settled { ok: true }) => (EditState::Viewing, None),
        (EditState::Saving, EditEvent::Settled { ok: false }) => (EditState::Editing, None),
        (state, _) => (state, None),
    }
}

/// A single todo row
///
/// The row tracks its todo in the store by id, so a row stays mounted (and
/// keeps its draft) while the record changes underneath it.
/// The placeholder row (`placeholder=true`) always shows its loader and ignores input.
#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(optional)] placeholder: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = todo.id;
    let record = Memo::new(move |_| {
        if placeholder {
            return todo.clone();
        }
        // a removed todo keeps its last known copy until the row unmounts
        store
            .with(|s| s.todo(id).cloned())
            .unwrap_or_else(|| todo.clone())
    });

    let (edit_state, set_edit_state) = signal(EditState::Viewing);
    let (draft, set_draft) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let is_loading = move || placeholder || store.with(|s| s.is_loading(id));

    // Focus the title field when it appears
    Effect::new(move |_| {
        if edit_state.get() == EditState::Editing {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let transition = move |event: EditEvent| {
        let (next, request) =
            record.with_untracked(|t| on_edit_event(edit_state.get_untracked(), t, event));
        set_edit_state.set(next);
        request
    };

    let start_edit = move |_: web_sys::MouseEvent| {
        if placeholder {
            return;
        }
        set_draft.set(record.with_untracked(|t| t.title.clone()));
        transition(EditEvent::Start);
    };

    // Shared by submit and blur
    let submit_edit = move || {
        let request = transition(EditEvent::Submit(draft.get_untracked()));
        let Some(request) = request else {
            return;
        };
        ctx.spawn(move |ctrl| async move {
            let ok = match request {
                EditOutcome::Delete(id) => ctrl.delete(id).await.is_ok(),
                EditOutcome::Rename(updated) => ctrl.update(updated).await.is_ok(),
                EditOutcome::Unchanged => true,
            };
            // the draft signal is left alone, so a failed save keeps it
            transition(EditEvent::Settled { ok });
        });
    };

    let on_keyup = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && edit_state.get_untracked() == EditState::Editing {
            set_draft.set(record.with_untracked(|t| t.title.clone()));
            transition(EditEvent::Cancel);
        }
    };

    let toggle = move |ev: web_sys::Event| {
        let current = record.get_untracked();
        // the checkbox follows the store, not the click
        event_target::<web_sys::HtmlInputElement>(&ev).set_checked(current.completed);
        if placeholder {
            return;
        }
        let flipped = current.with_completed(!current.completed);
        ctx.spawn(move |ctrl| async move {
            let _ = ctrl.update(flipped).await;
        });
    };

    let remove = move |_: web_sys::MouseEvent| {
        if placeholder {
            return;
        }
        ctx.spawn(move |ctrl| async move {
            let _ = ctrl.delete(id).await;
        });
    };

    let completed = move || record.with(|t| t.completed);

    view! {
        <div data-cy="Todo" class=move || if completed() { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    data-cy="TodoStatus"
                    type="checkbox"
                    class="todo__status"
                    prop:checked=completed
                    on:change=toggle
                />
            </label>

            {move || if edit_state.get() == EditState::Viewing {
                view! {
                    <span data-cy="TodoTitle" class="todo__title" on:dblclick=start_edit>
                        {move || record.with(|t| t.title.clone())}
                    </span>
                    <button
                        type="button"
                        class="todo__remove"
                        data-cy="TodoDelete"
                        disabled=is_loading
                        on:click=remove
                    >
                        "×"
                    </button>
                }.into_any()
            } else {
                view! {
                    <form on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        submit_edit();
                    }>
                        <input
                            data-cy="TodoTitleField"
                            type="text"
                            class="todo__title-field"
                            placeholder="Empty todo will be deleted"
                            node_ref=input_ref
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keyup=on_keyup
                            on:blur=move |_: web_sys::FocusEvent| submit_edit()
                        />
                    </form>
                }.into_any()
            }}

            <div
                data-cy="TodoLoader"
                class=move || if is_loading() { "modal overlay is-active" } else { "modal overlay" }
            >
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
