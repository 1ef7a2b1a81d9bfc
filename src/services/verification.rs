//! Email-verification token lifecycle: issue a one-time secret after signup,
//! consume it once when the link is followed.

use std::sync::Arc;

use chrono::Utc;

use crate::db::connection::DbPool;
use crate::error::AppError;
use crate::repositories::{user as user_repo, verification_token as token_repo};
use crate::utils::email::{Mailer, OutgoingEmail};
use crate::utils::token::{generate_token, hash_token, TOKEN_LENGTH};

#[derive(Clone)]
pub struct VerificationTokens {
    pool: DbPool,
    mailer: Arc<dyn Mailer>,
    app_url: String,
}

impl VerificationTokens {
    pub fn new(pool: DbPool, mailer: Arc<dyn Mailer>, app_url: String) -> Self {
        Self {
            pool,
            mailer,
            app_url,
        }
    }

    /// Generates a one-time string, persists its hash with a six-hour expiry,
    /// and emails the plaintext embedded in a verification link. The token is
    /// persisted before the send: a failed send leaves a valid but
    /// undelivered token behind, which is accepted and not retried.
    pub async fn issue(&self, user_id: &str, email: &str) -> Result<(), AppError> {
        let token = generate_token(TOKEN_LENGTH);
        token_repo::create(&self.pool, user_id, &hash_token(&token)).await?;

        let link = format!(
            "{}/verify/{}/{}",
            self.app_url.trim_end_matches('/'),
            user_id,
            token
        );
        let message = OutgoingEmail {
            to: email.to_string(),
            subject: "Verify your Email".to_string(),
            html_body: format!(
                "<p>Verify your email address to complete the signup and sign in to your \
                 account.</p><p>This link <b>expires in 6 hours</b>.</p>\
                 <p>Press <a href=\"{link}\">here</a> to proceed.</p>"
            ),
        };
        self.mailer.send(&message).map_err(AppError::Mail)?;

        Ok(())
    }

    /// Consumes a presented one-time string. An expired token rolls the
    /// pending signup back entirely: both the token and the account are
    /// deleted, forcing re-registration. A mismatched string leaves the
    /// token untouched so a mistyped link can be retried.
    pub async fn consume(&self, user_id: &str, presented: &str) -> Result<(), AppError> {
        let record = token_repo::find_latest_for_user(&self.pool, user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    "Account record doesn't exist or has been verified already. \
                     Please sign up or sign in."
                        .to_string(),
                )
            })?;

        if record.is_expired(Utc::now()) {
            token_repo::delete_for_user(&self.pool, user_id).await?;
            user_repo::delete(&self.pool, user_id).await?;
            return Err(AppError::Expired(
                "Link has expired. Please sign up again".to_string(),
            ));
        }

        if hash_token(presented) != record.token_hash {
            return Err(AppError::InvalidToken(
                "Invalid verification details passed. Check your inbox".to_string(),
            ));
        }

        // Flag update and token delete form one logical transition. If the
        // delete fails after the update, the account stays verified with a
        // stale token left behind, which is non-fatal.
        user_repo::mark_verified(&self.pool, user_id).await?;
        token_repo::delete_for_user(&self.pool, user_id).await?;

        Ok(())
    }
}
