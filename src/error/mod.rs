use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::response::ApiResponse;

/// Failure taxonomy for the account flows. Every variant is recovered at the
/// request boundary and translated into the `{status: "Failed", message}`
/// envelope with HTTP 200; callers inspect `status`, not the status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    NotVerified(String),
    #[error("{0}")]
    Expired(String),
    #[error("{0}")]
    InvalidToken(String),
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("storage failure")]
    Store(#[source] sqlx::Error),
    #[error("mail dispatch failure")]
    Mail(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// The message exposed to clients. Store/mail/internal failures are
    /// reported generically; their details only go to the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::AlreadyExists(msg)
            | AppError::NotFound(msg)
            | AppError::NotVerified(msg)
            | AppError::Expired(msg)
            | AppError::InvalidToken(msg)
            | AppError::InvalidCredentials(msg) => msg.clone(),
            AppError::Store(_) => "An error occurred while accessing user records".to_string(),
            AppError::Mail(_) => "Couldn't send email".to_string(),
            AppError::Internal(_) => "An unexpected error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(err) => tracing::error!("Store error: {:?}", err),
            AppError::Mail(err) => tracing::error!("Mail error: {:?}", err),
            AppError::Internal(err) => tracing::error!("Internal error: {:?}", err),
            _ => {}
        }

        let body = Json(ApiResponse::failed(self.public_message()));
        (StatusCode::OK, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Store(err)
    }
}
