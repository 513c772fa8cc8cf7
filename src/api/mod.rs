//! Remote Todo Collection
//!
//! Client-side interface to the user-scoped todo endpoint.
//! The controller only sees the `TodoApi` trait; `HttpTodoApi` talks to the server.

mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::models::{NewTodo, Todo};

pub use http::HttpTodoApi;

/// Common result type for remote calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Remote call failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response
    Network(String),
    /// Server answered with a non-success status
    Status(u16),
    /// Response body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code) => write!(f, "Server responded with status {}", code),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// CRUD over the todo collection of one user
///
/// Every call is a single request: no retries, no timeouts.
/// Futures are `?Send` because the browser executor is single-threaded.
#[async_trait(?Send)]
pub trait TodoApi {
    /// All todos of the configured user
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// Create a todo; the returned record carries the server-assigned id
    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo>;

    /// Replace the record with the same id; returns the server echo
    async fn update(&self, todo: &Todo) -> ApiResult<Todo>;

    /// Delete by id
    async fn delete(&self, id: u32) -> ApiResult<()>;
}
