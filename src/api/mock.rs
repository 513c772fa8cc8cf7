//! In-memory `TodoApi` for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use futures::channel::oneshot;

use super::{ApiError, ApiResult, TodoApi};
use crate::models::{NewTodo, Todo};

/// A request as the server would have seen it
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(NewTodo),
    Update(Todo),
    Delete(u32),
}

#[derive(Default)]
pub struct MockTodoApi {
    seed: RefCell<Vec<Todo>>,
    next_id: Cell<u32>,
    fail_list: Cell<bool>,
    fail_create: Cell<bool>,
    failing_ids: RefCell<HashSet<u32>>,
    create_gate: RefCell<Option<oneshot::Receiver<()>>>,
    gates: RefCell<HashMap<u32, oneshot::Receiver<()>>>,
    calls: RefCell<Vec<ApiCall>>,
}

impl MockTodoApi {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(100),
            ..Default::default()
        }
    }

    /// Todos returned by `list`
    pub fn with_todos(self, todos: Vec<Todo>) -> Self {
        *self.seed.borrow_mut() = todos;
        self
    }

    pub fn fail_list(&self) {
        self.fail_list.set(true);
    }

    pub fn fail_create(&self) {
        self.fail_create.set(true);
    }

    /// Make every update/delete of `id` fail
    pub fn fail_id(&self, id: u32) {
        self.failing_ids.borrow_mut().insert(id);
    }

    /// Hold the next create open until the returned sender fires
    pub fn hold_create(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.create_gate.borrow_mut() = Some(rx);
        tx
    }

    /// Hold the next update/delete of `id` open until the returned sender fires
    pub fn hold(&self, id: u32) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(id, rx);
        tx
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn updates(&self) -> Vec<Todo> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ApiCall::Update(todo) => Some(todo.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn deletes(&self) -> Vec<u32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ApiCall::Delete(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    async fn wait_for(&self, id: u32) {
        let gate = self.gates.borrow_mut().remove(&id);
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }

    fn check(&self, id: u32) -> ApiResult<()> {
        if self.failing_ids.borrow().contains(&id) {
            Err(ApiError::Status(500))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for MockTodoApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        self.calls.borrow_mut().push(ApiCall::List);
        if self.fail_list.get() {
            return Err(ApiError::Network("offline".into()));
        }
        Ok(self.seed.borrow().clone())
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
        self.calls.borrow_mut().push(ApiCall::Create(todo.clone()));
        let gate = self.create_gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        if self.fail_create.get() {
            return Err(ApiError::Status(500));
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Ok(Todo {
            id,
            title: todo.title.clone(),
            user_id: todo.user_id,
            completed: todo.completed,
        })
    }

    async fn update(&self, todo: &Todo) -> ApiResult<Todo> {
        self.calls.borrow_mut().push(ApiCall::Update(todo.clone()));
        self.wait_for(todo.id).await;
        self.check(todo.id)?;
        Ok(todo.clone())
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.calls.borrow_mut().push(ApiCall::Delete(id));
        self.wait_for(id).await;
        self.check(id)
    }
}
