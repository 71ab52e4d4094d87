use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use services::services::board::BoardServiceError;
use thiserror::Error;
use tracing::error;
use utils::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Board(#[from] BoardServiceError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Board(err) => match err {
                BoardServiceError::BoardNotFound
                | BoardServiceError::ColumnNotFound
                | BoardServiceError::TaskNotFound => StatusCode::NOT_FOUND,
                BoardServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("request failed: {}", self);
        }
        // The error always travels inside the envelope as well, so clients
        // that only inspect the body still see it.
        (status, Json(ApiResponse::<()>::error(self.to_string()))).into_response()
    }
}
