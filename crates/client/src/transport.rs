//! HTTP transport for the board API.

use std::time::Duration;

use async_trait::async_trait;
use db::models::task::{MoveTask, ReorderColumns, ReorderTasks, Task, UpdateTask};
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use services::services::board::BoardDetail;
use thiserror::Error;
use utils::response::{ApiResponse, SuccessResponse};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("{0}")]
    Api(String),
}

/// The four server primitives the reconciliation engine dispatches, plus
/// the property update used by the task edit flow.
#[async_trait]
pub trait BoardApi: Send + Sync {
    async fn fetch_board(&self, board_id: Uuid) -> Result<BoardDetail, ApiClientError>;

    async fn move_task(&self, request: &MoveTask) -> Result<Task, ApiClientError>;

    async fn reorder_tasks(&self, request: &ReorderTasks) -> Result<(), ApiClientError>;

    async fn reorder_columns(&self, request: &ReorderColumns) -> Result<(), ApiClientError>;

    async fn update_task(
        &self,
        task_id: Uuid,
        update: &UpdateTask,
    ) -> Result<Task, ApiClientError>;
}

/// reqwest-backed transport speaking the `{data} | {error}` envelope.
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    http: Client,
    base_url: String,
}

impl HttpBoardApi {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiClientError> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .user_agent(concat!("kanban-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Errors are carried in the envelope, not just the status line, so
    /// the body is decoded regardless of status and branched on its key.
    fn unwrap_envelope<T>(envelope: ApiResponse<T>) -> Result<T, ApiClientError> {
        envelope.into_result().map_err(ApiClientError::Api)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        let envelope: ApiResponse<T> = self
            .http
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(|e| ApiClientError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| ApiClientError::Decode(e.to_string()))?;
        Self::unwrap_envelope(envelope)
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiClientError> {
        let envelope: ApiResponse<T> = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiClientError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| ApiClientError::Decode(e.to_string()))?;
        Self::unwrap_envelope(envelope)
    }

    async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiClientError> {
        let envelope: ApiResponse<T> = self
            .http
            .put(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiClientError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| ApiClientError::Decode(e.to_string()))?;
        Self::unwrap_envelope(envelope)
    }
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn fetch_board(&self, board_id: Uuid) -> Result<BoardDetail, ApiClientError> {
        self.get_json(&format!("/api/boards/{board_id}")).await
    }

    async fn move_task(&self, request: &MoveTask) -> Result<Task, ApiClientError> {
        self.post_json("/api/tasks/move", request).await
    }

    async fn reorder_tasks(&self, request: &ReorderTasks) -> Result<(), ApiClientError> {
        let _: SuccessResponse = self.post_json("/api/tasks/reorder", request).await?;
        Ok(())
    }

    async fn reorder_columns(&self, request: &ReorderColumns) -> Result<(), ApiClientError> {
        let _: SuccessResponse = self.post_json("/api/columns/reorder", request).await?;
        Ok(())
    }

    async fn update_task(
        &self,
        task_id: Uuid,
        update: &UpdateTask,
    ) -> Result<Task, ApiClientError> {
        self.put_json(&format!("/api/tasks/{task_id}"), update).await
    }
}
