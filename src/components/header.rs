//! Todo Header Component
//!
//! New todo field and the toggle-all button.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn TodoHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (title, set_title) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let adding = move || store.temp_todo().with(Option::is_some);
    let has_todos = move || store.todos().with(|todos| !todos.is_empty());
    let all_completed = move || store.with(AppState::all_completed);

    // Refocus when the field is enabled again or a row settles
    Effect::new(move |_| {
        store.pending().track();
        if adding() {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get_untracked();
        ctx.spawn(move |ctrl| async move {
            // keep the text if the server refused it
            if ctrl.add(&text).await.is_ok() {
                set_title.set(String::new());
            }
        });
    };

    view! {
        <header class="todoapp__header">
            <Show when=has_todos>
                <button
                    type="button"
                    class=move || if all_completed() { "todoapp__toggle-all active" } else { "todoapp__toggle-all" }
                    data-cy="ToggleAllButton"
                    on:click=move |_| ctx.spawn(|ctrl| async move { ctrl.toggle_all().await })
                />
            </Show>

            <form on:submit=on_submit>
                <input
                    data-cy="NewTodoField"
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    node_ref=input_ref
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    disabled=adding
                />
            </form>
        </header>
    }
}
