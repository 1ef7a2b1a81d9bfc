//! HTTP handlers for the account routes. Handlers stay thin: extract,
//! delegate to the account service, wrap the outcome in the envelope.
//! Service errors convert to the `{status: "Failed"}` envelope via
//! `AppError::into_response`, except on the verify route, which answers a
//! browser link click and therefore redirects instead.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};

use crate::error::AppError;
use crate::models::reset_token::{RequestPasswordResetPayload, ResetPasswordPayload};
use crate::models::response::ApiResponse;
use crate::models::user::{SignInRequest, SignupRequest};
use crate::state::AppState;

static VERIFIED_PAGE: &str = include_str!("../../templates/verified.html");

pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    state.accounts.sign_up(payload).await?;
    Ok(Json(ApiResponse::pending("Verification email sent")))
}

pub async fn verify_email(
    State(state): State<AppState>,
    Path((user_id, unique_string)): Path<(String, String)>,
) -> Redirect {
    match state.accounts.verify_email(&user_id, &unique_string).await {
        Ok(()) => Redirect::to("/verified"),
        Err(err) => {
            let message: String =
                url::form_urlencoded::byte_serialize(err.public_message().as_bytes()).collect();
            Redirect::to(&format!("/verified?error=true&message={message}"))
        }
    }
}

pub async fn verified_page() -> Html<&'static str> {
    Html(VERIFIED_PAGE)
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let user = state
        .accounts
        .sign_in(&payload.email, &payload.password)
        .await?;
    // Clients receive an array of matching records, minus the password hash.
    Ok(Json(ApiResponse::success_with_data(
        "Sign-in successful",
        serde_json::json!([user]),
    )))
}

pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(payload): Json<RequestPasswordResetPayload>,
) -> Result<Json<ApiResponse>, AppError> {
    state
        .accounts
        .request_password_reset(&payload.email, &payload.redirect_url)
        .await?;
    Ok(Json(ApiResponse::pending("Password reset email sent")))
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordPayload>,
) -> Result<Json<ApiResponse>, AppError> {
    state
        .accounts
        .reset_password(&payload.user_id, &payload.reset_string, &payload.new_password)
        .await?;
    Ok(Json(ApiResponse::success("Password has been reset successfully")))
}
