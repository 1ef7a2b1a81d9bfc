//! Password-reset token lifecycle. Mirrors the verification flow with two
//! intentional differences: issuing purges all prior reset tokens for the
//! account, and an expired token never deletes the account itself.

use std::sync::Arc;

use chrono::Utc;

use crate::db::connection::DbPool;
use crate::error::AppError;
use crate::repositories::{reset_token as token_repo, user as user_repo};
use crate::utils::email::{Mailer, OutgoingEmail};
use crate::utils::password::hash_password;
use crate::utils::token::{generate_token, hash_token, TOKEN_LENGTH};

#[derive(Clone)]
pub struct PasswordResets {
    pool: DbPool,
    mailer: Arc<dyn Mailer>,
}

impl PasswordResets {
    pub fn new(pool: DbPool, mailer: Arc<dyn Mailer>) -> Self {
        Self { pool, mailer }
    }

    /// Purges every existing reset token for the account, then persists a
    /// fresh one (one-hour expiry) and emails a link built from the caller's
    /// redirect base.
    pub async fn issue(
        &self,
        user_id: &str,
        email: &str,
        redirect_base: &str,
    ) -> Result<(), AppError> {
        token_repo::delete_for_user(&self.pool, user_id).await?;

        let token = generate_token(TOKEN_LENGTH);
        token_repo::create(&self.pool, user_id, &hash_token(&token)).await?;

        let link = format!(
            "{}/{}/{}",
            redirect_base.trim_end_matches('/'),
            user_id,
            token
        );
        let message = OutgoingEmail {
            to: email.to_string(),
            subject: "Password Reset".to_string(),
            html_body: format!(
                "<p>We received a request to reset the password for your account.</p>\
                 <p>This link <b>expires in 1 hour</b>.</p>\
                 <p>Press <a href=\"{link}\">here</a> to choose a new password.</p>"
            ),
        };
        self.mailer.send(&message).map_err(AppError::Mail)?;

        Ok(())
    }

    /// Consumes a presented one-time string and, on a match, replaces the
    /// account's password hash. Expiry deletes only the token; losing a reset
    /// link must not destroy the account.
    pub async fn consume(
        &self,
        user_id: &str,
        presented: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let record = token_repo::find_latest_for_user(&self.pool, user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Password reset request not found".to_string())
            })?;

        if record.is_expired(Utc::now()) {
            token_repo::delete_for_user(&self.pool, user_id).await?;
            return Err(AppError::Expired(
                "Password reset link has expired. Please request a new one".to_string(),
            ));
        }

        if hash_token(presented) != record.token_hash {
            return Err(AppError::InvalidToken(
                "Invalid password reset details passed. Check your inbox".to_string(),
            ));
        }

        let new_hash = hash_password(new_password).map_err(AppError::Internal)?;
        user_repo::update_password_hash(&self.pool, user_id, &new_hash).await?;
        token_repo::delete_for_user(&self.pool, user_id).await?;

        Ok(())
    }
}
