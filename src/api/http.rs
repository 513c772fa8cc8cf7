//! HTTP Todo Client
//!
//! `TodoApi` over the REST collection at `{base}/todos`.

use async_trait::async_trait;

use super::{ApiResult, TodoApi};
use crate::models::{NewTodo, Todo};

pub struct HttpTodoApi {
    base_url: String,
    user_id: u32,
    client: reqwest::Client,
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>, user_id: u32) -> Self {
        Self {
            base_url: base_url.into(),
            user_id,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn todo_url(&self, id: u32) -> String {
        self.url(&format!("/todos/{}", id))
    }
}

fn ensure_ok(resp: reqwest::Response) -> ApiResult<reqwest::Response> {
    Ok(resp.error_for_status()?)
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        let resp = self
            .client
            .get(self.url("/todos"))
            .query(&[("userId", self.user_id)])
            .send()
            .await?;
        Ok(ensure_ok(resp)?.json().await?)
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
        let resp = self.client.post(self.url("/todos")).json(todo).send().await?;
        Ok(ensure_ok(resp)?.json().await?)
    }

    async fn update(&self, todo: &Todo) -> ApiResult<Todo> {
        let resp = self
            .client
            .patch(self.todo_url(todo.id))
            .json(todo)
            .send()
            .await?;
        Ok(ensure_ok(resp)?.json().await?)
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let resp = self.client.delete(self.todo_url(id)).send().await?;
        ensure_ok(resp)?;
        Ok(())
    }
}
