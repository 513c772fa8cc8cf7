//! Frontend Models
//!
//! Data structures matching the remote todo collection.

use serde::{Deserialize, Serialize};

/// Id carried by the placeholder shown while a create request is in flight
pub const PLACEHOLDER_ID: u32 = 0;

/// Todo data structure (matches the server record)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub user_id: u32,
    pub completed: bool,
}

impl Todo {
    /// Copy of this todo with a different completion state
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }

    /// Copy of this todo with a different title
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}

/// Create payload; the server assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub user_id: u32,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, user_id: u32) -> Self {
        Self {
            title: title.into(),
            user_id,
            completed: false,
        }
    }

    /// The row rendered until the server answers
    pub fn placeholder(&self) -> Todo {
        Todo {
            id: PLACEHOLDER_ID,
            title: self.title.clone(),
            user_id: self.user_id,
            completed: self.completed,
        }
    }
}

/// List filter selected in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    All,
    Active,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::All, Status::Active, Status::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Status::All => "All",
            Status::Active => "Active",
            Status::Completed => "Completed",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Status::All => "#/",
            Status::Active => "#/active",
            Status::Completed => "#/completed",
        }
    }

    /// Whether a todo belongs in this view
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Status::All => true,
            Status::Active => !todo.completed,
            Status::Completed => todo.completed,
        }
    }
}

/// The single error shown in the notification banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMessage {
    #[default]
    Default,
    UnableToLoad,
    EmptyTitle,
    UnableToAdd,
    UnableToDelete,
    UnableToUpdate,
}

impl ErrorMessage {
    pub fn text(&self) -> &'static str {
        match self {
            ErrorMessage::Default => "",
            ErrorMessage::UnableToLoad => "Unable to load todos",
            ErrorMessage::EmptyTitle => "Title should not be empty",
            ErrorMessage::UnableToAdd => "Unable to add a todo",
            ErrorMessage::UnableToDelete => "Unable to delete a todo",
            ErrorMessage::UnableToUpdate => "Unable to update a todo",
        }
    }

    pub fn is_shown(&self) -> bool {
        *self != ErrorMessage::Default
    }
}
