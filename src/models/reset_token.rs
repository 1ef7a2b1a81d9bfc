//! Models for password reset functionality.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of a password reset token. At most one live row
/// per user: issuing a new token purges the previous ones first.
pub struct ResetToken {
    pub id: String,
    /// User ID associated with this reset token.
    pub user_id: String,
    /// SHA-256 hex digest of the one-time string.
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    /// Fixed window of one hour from creation.
    pub expires_at: DateTime<Utc>,
}

impl ResetToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload for requesting a password reset email.
pub struct RequestPasswordResetPayload {
    pub email: String,
    /// Base URL the reset link in the email is built from.
    pub redirect_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload for completing a password reset with the emailed one-time string.
pub struct ResetPasswordPayload {
    pub user_id: String,
    pub reset_string: String,
    pub new_password: String,
}
