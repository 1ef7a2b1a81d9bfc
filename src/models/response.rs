//! The response envelope every account endpoint speaks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Outcome marker clients switch on; the HTTP status code stays 200.
pub enum Status {
    Success,
    Failed,
    /// The request was accepted but a follow-up step (email verification)
    /// is still outstanding.
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
/// Uniform `{status, message, data?}` body returned by every endpoint.
pub struct ApiResponse {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data: None,
        }
    }

    pub fn success_with_data(message: impl Into<String>, data: Value) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn pending(message: impl Into<String>) -> Self {
        Self {
            status: Status::Pending,
            message: message.into(),
            data: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: Status::Failed,
            message: message.into(),
            data: None,
        }
    }
}
