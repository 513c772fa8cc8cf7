//! Todo List App
//!
//! Root component: builds the store and controller, loads the list once,
//! and lays out header, list, footer and the error banner.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpTodoApi;
use crate::components::{ErrorNotification, TodoFooter, TodoHeader, TodoList, UserWarning};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::TodoController;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let Some(user_id) = config.user_id else {
        log::warn!("TODO_USER_ID is not set, showing the user warning");
        return view! { <UserWarning /> }.into_any();
    };

    // State
    let store = Store::new(AppState::new());
    let api = HttpTodoApi::new(config.api_url, user_id);
    let ctx = AppContext::new(store, TodoController::new(api, store, user_id));

    // Provide context to all children
    provide_context(ctx);

    // Load todos on mount
    ctx.spawn(|ctrl| async move {
        let _ = ctrl.load().await;
    });

    let has_todos = move || store.todos().with(|todos| !todos.is_empty());

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <TodoHeader />
                <TodoList />
                <Show when=has_todos>
                    <TodoFooter />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
    .into_any()
}
