//! Model for the one-time email-verification token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of a pending email verification. The plaintext
/// one-time string is only ever held in the outgoing email; the row stores
/// its SHA-256 hash.
pub struct VerificationToken {
    pub id: String,
    /// Owning account; tokens reference users one-way.
    pub user_id: String,
    /// SHA-256 hex digest of the one-time string.
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    /// Fixed window of six hours from creation.
    pub expires_at: DateTime<Utc>,
}

impl VerificationToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}
