//! Repository functions for the credential store.

use chrono::Utc;

use crate::db::connection::DbPool;
use crate::error::AppError;
use crate::models::user::User;

const USER_COLUMNS: &str = "id, name, email, password_hash, date_of_birth, phone_number, \
                            address, verified, created_at, updated_at";

pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_id(pool: &DbPool, user_id: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Inserts a new account row. The unique index on `email` backstops the
/// service-level existence check: losing that race surfaces as
/// `AlreadyExists` instead of a duplicate row.
pub async fn create(pool: &DbPool, user: &User) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO users (id, name, email, password_hash, date_of_birth, phone_number,
                           address, verified, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.date_of_birth)
    .bind(&user.phone_number)
    .bind(&user.address)
    .bind(user.verified)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(pool)
    .await
    .map_err(|err| match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::AlreadyExists("User with the provided email already exists".to_string())
        }
        _ => AppError::Store(err),
    })?;

    Ok(())
}

pub async fn mark_verified(pool: &DbPool, user_id: &str) -> Result<(), AppError> {
    sqlx::query("UPDATE users SET verified = TRUE, updated_at = ? WHERE id = ?")
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn update_password_hash(
    pool: &DbPool,
    user_id: &str,
    new_hash: &str,
) -> Result<(), AppError> {
    sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
        .bind(new_hash)
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn delete(pool: &DbPool, user_id: &str) -> Result<(), AppError> {
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}
