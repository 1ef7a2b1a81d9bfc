use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::db::connection::DbPool;
use crate::error::AppError;
use crate::models::verification_token::VerificationToken;

/// Verification links stay valid for six hours.
const VALIDITY_HOURS: i64 = 6;

pub async fn create(
    pool: &DbPool,
    user_id: &str,
    token_hash: &str,
) -> Result<VerificationToken, AppError> {
    let now = Utc::now();
    let record = VerificationToken {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        token_hash: token_hash.to_string(),
        created_at: now,
        expires_at: now + Duration::hours(VALIDITY_HOURS),
    };

    sqlx::query(
        r#"
        INSERT INTO verification_tokens (id, user_id, token_hash, created_at, expires_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.user_id)
    .bind(&record.token_hash)
    .bind(record.created_at)
    .bind(record.expires_at)
    .execute(pool)
    .await?;

    Ok(record)
}

/// Uniqueness per user is not enforced, so several live tokens may coexist;
/// consumption always considers the newest one.
pub async fn find_latest_for_user(
    pool: &DbPool,
    user_id: &str,
) -> Result<Option<VerificationToken>, AppError> {
    let record = sqlx::query_as::<_, VerificationToken>(
        r#"
        SELECT id, user_id, token_hash, created_at, expires_at
        FROM verification_tokens
        WHERE user_id = ?
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

pub async fn delete_for_user(pool: &DbPool, user_id: &str) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM verification_tokens WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
