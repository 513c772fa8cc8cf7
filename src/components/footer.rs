//! Todo Footer Component
//!
//! Remaining-count, filter links and "Clear completed".

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Status;
use crate::store::{AppState, AppStateStoreFields};

pub fn items_left_label(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{} {} left", count, noun)
}

fn filter_hook(status: Status) -> &'static str {
    match status {
        Status::All => "FilterLinkAll",
        Status::Active => "FilterLinkActive",
        Status::Completed => "FilterLinkCompleted",
    }
}

#[component]
pub fn TodoFooter() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let active_count = move || store.with(AppState::active_count);
    let has_completed = move || store.with(|s| s.completed_count() > 0);

    view! {
        <footer class="todoapp__footer" data-cy="Footer">
            <span class="todo-count" data-cy="TodosCounter">
                {move || items_left_label(active_count())}
            </span>

            <nav class="filter" data-cy="Filter">
                {Status::ALL.into_iter().map(|status| {
                    let is_selected = move || store.status().get() == status;
                    view! {
                        <a
                            href=status.href()
                            class=move || if is_selected() { "filter__link selected" } else { "filter__link" }
                            data-cy=filter_hook(status)
                            on:click=move |_| ctx.set_filter(status)
                        >
                            {status.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                data-cy="ClearCompletedButton"
                disabled=move || !has_completed()
                on:click=move |_| ctx.spawn(|ctrl| async move { ctrl.delete_all_completed().await })
            >
                "Clear completed"
            </button>
        </footer>
    }
}
