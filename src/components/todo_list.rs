//! Todo List Component
//!
//! Visible todos followed by the placeholder of a pending create.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::use_app_context;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_context().store;

    let visible = move || store.with(AppState::visible_todos);

    view! {
        <section class="todoapp__main" data-cy="TodoList">
            <For
                each=visible
                // rows follow their own record, so an update never remounts them
                key=|todo| todo.id
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
            {move || store.temp_todo().get().map(|temp| view! {
                <TodoItem todo=temp placeholder=true />
            })}
        </section>
    }
}
