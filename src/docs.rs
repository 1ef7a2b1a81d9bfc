#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use utoipa::OpenApi;

use crate::models::{
    reset_token::{RequestPasswordResetPayload, ResetPasswordPayload},
    response::{ApiResponse, Status},
    user::{SignInRequest, SignupRequest, UserResponse},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        signup_doc,
        verify_doc,
        verified_doc,
        sign_in_doc,
        request_password_reset_doc,
        reset_password_doc
    ),
    components(schemas(
        SignupRequest,
        SignInRequest,
        RequestPasswordResetPayload,
        ResetPasswordPayload,
        ApiResponse,
        Status,
        UserResponse
    )),
    tags((name = "accounts", description = "Signup, email verification, sign-in and password reset"))
)]
pub struct ApiDoc;

#[utoipa::path(
    post,
    path = "/signup",
    tag = "accounts",
    request_body = SignupRequest,
    responses((status = 200, description = "Envelope; Pending when the verification email was sent", body = ApiResponse))
)]
fn signup_doc() {}

#[utoipa::path(
    get,
    path = "/verify/{userId}/{uniqueString}",
    tag = "accounts",
    params(
        ("userId" = String, Path, description = "Account identifier from the emailed link"),
        ("uniqueString" = String, Path, description = "One-time verification string")
    ),
    responses((status = 303, description = "Redirect to /verified, with error/message query parameters on failure"))
)]
fn verify_doc() {}

#[utoipa::path(
    get,
    path = "/verified",
    tag = "accounts",
    responses((status = 200, description = "Static confirmation page"))
)]
fn verified_doc() {}

#[utoipa::path(
    post,
    path = "/signing",
    tag = "accounts",
    request_body = SignInRequest,
    responses((status = 200, description = "Envelope; Success carries the sanitized account record", body = ApiResponse))
)]
fn sign_in_doc() {}

#[utoipa::path(
    post,
    path = "/requestPasswordReset",
    tag = "accounts",
    request_body = RequestPasswordResetPayload,
    responses((status = 200, description = "Envelope; Pending when the reset email was sent", body = ApiResponse))
)]
fn request_password_reset_doc() {}

#[utoipa::path(
    post,
    path = "/resetPassword",
    tag = "accounts",
    request_body = ResetPasswordPayload,
    responses((status = 200, description = "Envelope", body = ApiResponse))
)]
fn reset_password_doc() {}
