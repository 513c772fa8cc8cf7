//! Todo Controller
//!
//! Issues one remote call per user action and folds each outcome into the
//! shared state. Several calls may be in flight at once (toggle all, clear
//! completed); each applies its own result when it settles, in completion order.

use std::rc::Rc;

use futures::future::join_all;
use log::{debug, info, warn};

use crate::api::{ApiError, TodoApi};
use crate::models::{ErrorMessage, NewTodo, Status, Todo};
use crate::store::StateHandle;

/// Why an action did not go through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// New todo title was blank
    EmptyTitle,
    /// A create request is still outstanding
    AddInProgress,
    /// The remote call failed
    Api(ApiError),
}

impl std::fmt::Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoError::EmptyTitle => write!(f, "Title should not be empty"),
            TodoError::AddInProgress => write!(f, "Another todo is being added"),
            TodoError::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for TodoError {}

impl From<ApiError> for TodoError {
    fn from(err: ApiError) -> Self {
        TodoError::Api(err)
    }
}

pub type TodoResult<T> = Result<T, TodoError>;

pub struct TodoController<A, S> {
    api: Rc<A>,
    state: S,
    user_id: u32,
}

impl<A, S: Clone> Clone for TodoController<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            state: self.state.clone(),
            user_id: self.user_id,
        }
    }
}

impl<A: TodoApi + 'static, S: StateHandle> TodoController<A, S> {
    pub fn new(api: A, state: S, user_id: u32) -> Self {
        Self {
            api: Rc::new(api),
            state,
            user_id,
        }
    }

    /// Fetch the full list; run once at startup
    pub async fn load(&self) -> TodoResult<()> {
        match self.api.list().await {
            Ok(todos) => {
                info!("loaded {} todos", todos.len());
                self.state.update(|s| s.replace_todos(todos));
                Ok(())
            }
            Err(err) => {
                warn!("loading todos failed: {}", err);
                self.state.update(|s| s.set_error(ErrorMessage::UnableToLoad));
                Err(err.into())
            }
        }
    }

    /// Create a todo from `title` (trimmed).
    ///
    /// The placeholder row is shown until the server answers.
    pub async fn add(&self, title: &str) -> TodoResult<Todo> {
        if self.state.read(|s| s.temp_todo.is_some()) {
            return Err(TodoError::AddInProgress);
        }
        self.state.update(|s| s.dismiss_error());

        let title = title.trim();
        if title.is_empty() {
            self.state.update(|s| s.set_error(ErrorMessage::EmptyTitle));
            return Err(TodoError::EmptyTitle);
        }

        let new_todo = NewTodo::new(title, self.user_id);
        debug!("creating todo {:?}", new_todo.title);
        self.state.update(|s| s.temp_todo = Some(new_todo.placeholder()));

        let result = self.api.create(&new_todo).await;

        self.state.update(|s| {
            s.temp_todo = None;
            match &result {
                Ok(todo) => s.push_todo(todo.clone()),
                Err(_) => s.set_error(ErrorMessage::UnableToAdd),
            }
        });
        if let Err(err) = &result {
            warn!("creating todo failed: {}", err);
        }
        result.map_err(TodoError::from)
    }

    /// Send `todo` as the new version of the record with its id
    pub async fn update(&self, todo: Todo) -> TodoResult<Todo> {
        let id = todo.id;
        debug!("updating todo #{}", id);
        self.state.update(|s| s.begin_request(id));

        let result = self.api.update(&todo).await;

        self.state.update(|s| {
            match &result {
                Ok(updated) => s.replace_todo(updated.clone()),
                Err(_) => s.set_error(ErrorMessage::UnableToUpdate),
            }
            s.finish_request(id);
        });
        if let Err(err) = &result {
            warn!("updating todo #{} failed: {}", id, err);
        }
        result.map_err(TodoError::from)
    }

    pub async fn delete(&self, id: u32) -> TodoResult<()> {
        debug!("deleting todo #{}", id);
        self.state.update(|s| s.begin_request(id));

        let result = self.api.delete(id).await;

        self.state.update(|s| {
            match &result {
                Ok(()) => s.remove_todo(id),
                Err(_) => s.set_error(ErrorMessage::UnableToDelete),
            }
            s.finish_request(id);
        });
        if let Err(err) = &result {
            warn!("deleting todo #{} failed: {}", id, err);
        }
        result.map_err(TodoError::from)
    }

    /// Delete every todo completed right now, one request each.
    /// No atomicity: failures leave their todos in place.
    pub async fn delete_all_completed(&self) {
        let ids = self.state.read(|s| s.completed_ids());
        debug!("clearing {} completed todos", ids.len());
        join_all(ids.into_iter().map(|id| self.delete(id))).await;
    }

    /// Mark everything active if all are completed, otherwise mark everything
    /// completed. Already-matching todos are sent too.
    pub async fn toggle_all(&self) {
        let (todos, completed) = self.state.read(|s| (s.todos.clone(), !s.all_completed()));
        debug!("toggling {} todos to completed={}", todos.len(), completed);
        join_all(
            todos
                .into_iter()
                .map(|todo| self.update(todo.with_completed(completed))),
        )
        .await;
    }

    pub fn set_filter(&self, status: Status) {
        self.state.update(|s| s.set_status(status));
    }

    pub fn dismiss_error(&self) {
        self.state.update(|s| s.dismiss_error());
    }
}
