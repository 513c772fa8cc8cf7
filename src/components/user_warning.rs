//! User Warning Component
//!
//! Shown instead of the app when no user id was configured at build time.

use leptos::prelude::*;

#[component]
pub fn UserWarning() -> impl IntoView {
    view! {
        <section class="section">
            <p class="box is-size-3">
                "Please set " <b>"TODO_USER_ID"</b> " to your user id and rebuild the app"
            </p>
        </section>
    }
}
