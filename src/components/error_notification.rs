//! Error Notification Component
//!
//! Dismissible banner for the current error; hides itself after a few seconds.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

const AUTO_HIDE_MS: u32 = 3000;

fn banner_class(shown: bool) -> &'static str {
    if shown {
        "notification is-danger is-light has-text-weight-normal"
    } else {
        "notification is-danger is-light has-text-weight-normal hidden"
    }
}

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Memo so unrelated state writes don't restart the timer;
    // the sequence number makes a repeated message restart it.
    let shown_error = Memo::new(move |_| (store.error().get(), store.error_seq().get()));
    let error = Memo::new(move |_| shown_error.get().0);
    let hide_timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let shown = shown_error.get().0.is_shown();
        // dropping the previous Timeout cancels it
        hide_timer.set_value(shown.then(|| Timeout::new(AUTO_HIDE_MS, move || ctx.dismiss_error())));
    });

    view! {
        <div
            data-cy="ErrorNotification"
            class=move || banner_class(error.get().is_shown())
        >
            <button
                data-cy="HideErrorButton"
                type="button"
                class="delete"
                on:click=move |_| ctx.dismiss_error()
            />
            {move || error.get().text()}
        </div>
    }
}
