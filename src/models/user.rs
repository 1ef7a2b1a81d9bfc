//! Models representing user accounts and the signup/sign-in payloads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of a user account.
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// Display name (letters and spaces only).
    pub name: String,
    /// Email address; exactly one account per email.
    pub email: String,
    /// Argon2 hash of the user's password.
    pub password_hash: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub address: String,
    /// Set true exactly once, by successful email verification.
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Constructs an unverified user with a freshly generated identifier.
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        date_of_birth: NaiveDate,
        phone_number: String,
        address: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password_hash,
            date_of_birth,
            phone_number,
            address,
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload submitted on signup. `date_of_birth` arrives as a string and is
/// parsed during validation.
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
/// Credentials submitted by a user attempting to sign in.
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Public-facing representation of a user. Deliberately excludes the
/// password hash.
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub address: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            date_of_birth: user.date_of_birth,
            phone_number: user.phone_number,
            address: user.address,
            verified: user.verified,
            created_at: user.created_at,
        }
    }
}
