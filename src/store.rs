//! Application State Store
//!
//! Canonical todo list plus the transient request state around it.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::filter_todos;
use crate::models::{ErrorMessage, Status, Todo};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Server-acknowledged todos, in insertion order
    pub todos: Vec<Todo>,
    /// Footer filter
    pub status: Status,
    /// Row shown while a create request is outstanding
    pub temp_todo: Option<Todo>,
    /// Outstanding update/delete requests per todo id
    pub pending: HashMap<u32, usize>,
    /// Banner content
    pub error: ErrorMessage,
    /// Bumped by every `set_error`, so a repeated message still counts as new
    pub error_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Transforms
    // ========================

    pub fn replace_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    pub fn push_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Swap in the server copy of a todo, keeping its position.
    /// A todo that is no longer listed stays gone.
    pub fn replace_todo(&mut self, updated: Todo) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == updated.id) {
            *todo = updated;
        }
    }

    pub fn remove_todo(&mut self, id: u32) {
        self.todos.retain(|todo| todo.id != id);
    }

    pub fn begin_request(&mut self, id: u32) {
        *self.pending.entry(id).or_insert(0) += 1;
    }

    pub fn finish_request(&mut self, id: u32) {
        if let Some(count) = self.pending.get_mut(&id) {
            *count -= 1;
            if *count == 0 {
                self.pending.remove(&id);
            }
        }
    }

    pub fn set_error(&mut self, error: ErrorMessage) {
        self.error = error;
        self.error_seq = self.error_seq.wrapping_add(1);
    }

    pub fn dismiss_error(&mut self) {
        self.error = ErrorMessage::Default;
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    // ========================
    // Derived reads
    // ========================

    pub fn todo(&self, id: u32) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn visible_todos(&self) -> Vec<Todo> {
        filter_todos(&self.todos, self.status)
    }

    pub fn is_loading(&self, id: u32) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    pub fn completed_ids(&self) -> Vec<u32> {
        self.todos
            .iter()
            .filter(|todo| todo.completed)
            .map(|todo| todo.id)
            .collect()
    }

    /// Non-empty and every todo completed
    pub fn all_completed(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|todo| todo.completed)
    }
}

/// Read/write access to the state shared by concurrent requests.
///
/// Each completion goes through one `update` call against the current value,
/// so interleaved completions never overwrite each other.
pub trait StateHandle: Clone + 'static {
    fn update(&self, f: impl FnOnce(&mut AppState));

    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

impl StateHandle for AppStore {
    fn update(&self, f: impl FnOnce(&mut AppState)) {
        Update::update(self, f);
    }

    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.with_untracked(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            user_id: 1,
            completed,
        }
    }

    fn state_with(todos: Vec<Todo>) -> AppState {
        AppState {
            todos,
            ..AppState::new()
        }
    }

    #[test]
    fn test_replace_todo_keeps_position() {
        let mut state = state_with(vec![make_todo(1, false), make_todo(2, false), make_todo(3, false)]);
        let before = state.todos.clone();

        state.replace_todo(make_todo(2, true).with_title("renamed"));

        assert_eq!(state.todos[0], before[0]);
        assert_eq!(state.todos[1].title, "renamed");
        assert!(state.todos[1].completed);
        assert_eq!(state.todos[2], before[2]);
    }

    #[test]
    fn test_replace_missing_todo_is_noop() {
        let mut state = state_with(vec![make_todo(1, false), make_todo(2, false)]);
        let before = state.clone();

        state.replace_todo(make_todo(9, true));

        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_todo() {
        let mut state = state_with(vec![make_todo(1, false), make_todo(2, true), make_todo(3, false)]);
        state.remove_todo(2);
        let ids: Vec<u32> = state.todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_pending_counts_overlapping_requests() {
        let mut state = AppState::new();
        state.begin_request(4);
        state.begin_request(4);
        assert!(state.is_loading(4));

        state.finish_request(4);
        assert!(state.is_loading(4));

        state.finish_request(4);
        assert!(!state.is_loading(4));
        assert!(state.pending.is_empty());

        // stray finish is ignored
        state.finish_request(4);
        assert!(state.pending.is_empty());
    }

    #[test]
    fn test_counts_ignore_placeholder() {
        let mut state = state_with(vec![make_todo(1, false), make_todo(2, true), make_todo(3, true)]);
        state.temp_todo = Some(make_todo(0, false));

        assert_eq!(state.active_count(), 1);
        assert_eq!(state.completed_count(), 2);
        assert_eq!(state.completed_ids(), vec![2, 3]);
    }

    #[test]
    fn test_all_completed() {
        assert!(!AppState::new().all_completed());
        assert!(!state_with(vec![make_todo(1, true), make_todo(2, false)]).all_completed());
        assert!(state_with(vec![make_todo(1, true), make_todo(2, true)]).all_completed());
    }

    #[test]
    fn test_todo_lookup_sees_latest_record() {
        let mut state = state_with(vec![make_todo(1, false), make_todo(2, false)]);
        assert_eq!(state.todo(2), Some(&make_todo(2, false)));

        state.replace_todo(make_todo(2, true));
        assert!(state.todo(2).is_some_and(|todo| todo.completed));

        state.remove_todo(2);
        assert_eq!(state.todo(2), None);
    }

    #[test]
    fn test_repeated_error_bumps_sequence() {
        let mut state = AppState::new();
        state.set_error(ErrorMessage::UnableToDelete);
        let first = state.error_seq;

        state.set_error(ErrorMessage::UnableToDelete);
        assert_eq!(state.error, ErrorMessage::UnableToDelete);
        assert_ne!(state.error_seq, first);

        // dismiss then the same error again in one tick
        let before = state.error_seq;
        state.dismiss_error();
        state.set_error(ErrorMessage::EmptyTitle);
        state.dismiss_error();
        state.set_error(ErrorMessage::EmptyTitle);
        assert_eq!(state.error_seq, before.wrapping_add(2));
    }

    #[test]
    fn test_visible_todos_follow_status() {
        let mut state = state_with(vec![make_todo(1, false), make_todo(2, true)]);
        state.set_status(Status::Completed);
        let ids: Vec<u32> = state.visible_todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
