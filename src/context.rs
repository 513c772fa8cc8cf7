//! Application Context
//!
//! Store and controller provided to every component via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::controller::TodoController;
use crate::models::Status;
use crate::store::AppStore;

/// Controller wired to the HTTP client and the reactive store
pub type AppController = TodoController<HttpTodoApi, AppStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive state, read by the views
    pub store: AppStore,
    /// The controller holds an `Rc`, so it lives in local storage
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, controller: AppController) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }

    /// Run a controller action on the local executor
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        spawn_local(action(self.controller()));
    }

    pub fn set_filter(&self, status: Status) {
        self.controller().set_filter(status);
    }

    pub fn dismiss_error(&self) {
        self.controller().dismiss_error();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
