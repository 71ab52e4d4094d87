//! The `{data} | {error}` response envelope shared by the server and client.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Every API endpoint responds with exactly one of these two shapes.
/// Clients must branch on the envelope, not on the HTTP status alone.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success { data: T },
    Error { error: String },
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    /// Collapse the envelope into a `Result`, surfacing the `error` key.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Error { error } => Err(error),
        }
    }
}

/// Body of reorder endpoints, which mutate in bulk and return no entity.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
