//! Orchestration of the signup, sign-in, verification, and reset flows.

use std::sync::Arc;

use crate::config::Config;
use crate::db::connection::DbPool;
use crate::error::AppError;
use crate::models::user::{SignupRequest, User, UserResponse};
use crate::repositories::user as user_repo;
use crate::services::password_reset::PasswordResets;
use crate::services::verification::VerificationTokens;
use crate::utils::email::Mailer;
use crate::utils::password::{hash_password, verify_password};
use crate::validation::rules;

#[derive(Clone)]
pub struct AccountService {
    pool: DbPool,
    verification: VerificationTokens,
    resets: PasswordResets,
}

impl AccountService {
    pub fn new(pool: DbPool, config: &Config, mailer: Arc<dyn Mailer>) -> Self {
        let verification =
            VerificationTokens::new(pool.clone(), mailer.clone(), config.app_url.clone());
        let resets = PasswordResets::new(pool.clone(), mailer);
        Self {
            pool,
            verification,
            resets,
        }
    }

    /// Validates the signup payload, creates the unverified account, and
    /// issues a verification token. The existence check before the insert is
    /// not atomic with it; the unique email index catches the losing side of
    /// a concurrent signup race.
    pub async fn sign_up(&self, payload: SignupRequest) -> Result<(), AppError> {
        let fields = validate_signup(&payload)?;

        if user_repo::find_by_email(&self.pool, &fields.email)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(
                "User with the provided email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&fields.password).map_err(AppError::Internal)?;
        let user = User::new(
            fields.name,
            fields.email,
            password_hash,
            fields.date_of_birth,
            fields.phone_number,
            fields.address,
        );
        user_repo::create(&self.pool, &user).await?;

        self.verification.issue(&user.id, &user.email).await
    }

    /// Verifies a presented one-time string against the account's pending
    /// verification token.
    pub async fn verify_email(&self, user_id: &str, presented: &str) -> Result<(), AppError> {
        self.verification.consume(user_id, presented).await
    }

    /// Checks credentials and returns the sanitized account record. Sign-in
    /// is refused for unverified accounts regardless of the password.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserResponse, AppError> {
        let email = email.trim();
        let password = password.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation("Empty credentials supplied".to_string()));
        }

        let user = user_repo::find_by_email(&self.pool, email)
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid credentials entered".to_string()))?;

        if !user.verified {
            return Err(AppError::NotVerified(
                "Email has not been verified yet. Check your inbox".to_string(),
            ));
        }

        let matches =
            verify_password(password, &user.password_hash).map_err(AppError::Internal)?;
        if !matches {
            return Err(AppError::InvalidCredentials(
                "Invalid password entered".to_string(),
            ));
        }

        Ok(UserResponse::from(user))
    }

    /// Issues a password-reset token for a verified account.
    pub async fn request_password_reset(
        &self,
        email: &str,
        redirect_url: &str,
    ) -> Result<(), AppError> {
        let email = email.trim();
        let redirect_url = redirect_url.trim();
        if email.is_empty() || redirect_url.is_empty() {
            return Err(AppError::Validation(
                "Empty input fields!".to_string(),
            ));
        }

        let user = user_repo::find_by_email(&self.pool, email)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No account with the supplied email exists".to_string())
            })?;

        if !user.verified {
            return Err(AppError::NotVerified(
                "Email hasn't been verified yet. Check your inbox".to_string(),
            ));
        }

        self.resets.issue(&user.id, &user.email, redirect_url).await
    }

    /// Completes a reset with the emailed one-time string. The new password
    /// must meet the same length floor as signup.
    pub async fn reset_password(
        &self,
        user_id: &str,
        reset_string: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let new_password = new_password.trim();
        if user_id.trim().is_empty() || reset_string.trim().is_empty() || new_password.is_empty() {
            return Err(AppError::Validation("Empty input fields!".to_string()));
        }
        if rules::validate_password(new_password).is_err() {
            return Err(AppError::Validation("Password length too short".to_string()));
        }

        self.resets
            .consume(user_id, reset_string.trim(), new_password)
            .await
    }
}

#[derive(Debug)]
struct ValidatedSignup {
    name: String,
    email: String,
    password: String,
    date_of_birth: chrono::NaiveDate,
    phone_number: String,
    address: String,
}

/// Trims every field, then applies the rules in a fixed order,
/// short-circuiting on the first failure with its specific message.
fn validate_signup(payload: &SignupRequest) -> Result<ValidatedSignup, AppError> {
    let name = payload.name.trim();
    let email = payload.email.trim();
    let password = payload.password.trim();
    let date_of_birth = payload.date_of_birth.trim();
    let phone_number = payload.phone_number.trim();
    let address = payload.address.trim();

    if name.is_empty()
        || email.is_empty()
        || password.is_empty()
        || date_of_birth.is_empty()
        || phone_number.is_empty()
        || address.is_empty()
    {
        return Err(AppError::Validation("Empty input fields!".to_string()));
    }
    rules::validate_name(name)
        .map_err(|_| AppError::Validation("Invalid name entered".to_string()))?;
    rules::validate_email(email)
        .map_err(|_| AppError::Validation("Invalid email entered".to_string()))?;
    let date_of_birth = rules::parse_date_of_birth(date_of_birth)
        .map_err(|_| AppError::Validation("Invalid date of birth entered".to_string()))?;
    rules::validate_password(password)
        .map_err(|_| AppError::Validation("Password length too short".to_string()))?;

    Ok(ValidatedSignup {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        date_of_birth,
        phone_number: phone_number.to_string(),
        address: address.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SignupRequest {
        SignupRequest {
            name: " Jane Doe ".into(),
            email: " jane@x.com ".into(),
            password: "longenough1".into(),
            date_of_birth: "1990-01-01".into(),
            phone_number: "555".into(),
            address: "1 Main St".into(),
        }
    }

    fn message(err: AppError) -> String {
        err.public_message()
    }

    #[test]
    fn validation_trims_fields_before_checking() {
        let fields = validate_signup(&payload()).expect("valid");
        assert_eq!(fields.name, "Jane Doe");
        assert_eq!(fields.email, "jane@x.com");
    }

    #[test]
    fn validation_short_circuits_in_a_fixed_order() {
        // An all-whitespace field is caught by the emptiness check before
        // any per-field rule runs.
        let mut p = payload();
        p.address = "   ".into();
        p.email = "broken".into();
        assert_eq!(
            message(validate_signup(&p).unwrap_err()),
            "Empty input fields!"
        );

        // Name is checked before email even when both are invalid.
        let mut p = payload();
        p.name = "J4ne".into();
        p.email = "broken".into();
        assert_eq!(
            message(validate_signup(&p).unwrap_err()),
            "Invalid name entered"
        );

        let mut p = payload();
        p.email = "broken".into();
        assert_eq!(
            message(validate_signup(&p).unwrap_err()),
            "Invalid email entered"
        );

        let mut p = payload();
        p.date_of_birth = "01/01/1990".into();
        assert_eq!(
            message(validate_signup(&p).unwrap_err()),
            "Invalid date of birth entered"
        );

        let mut p = payload();
        p.password = "short12".into();
        assert_eq!(
            message(validate_signup(&p).unwrap_err()),
            "Password length too short"
        );
    }
}
