use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;
pub mod validation;

#[cfg(test)]
mod testing;

use state::AppState;

/// Builds the application router with shared layers applied.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/signup", post(handlers::accounts::signup))
        .route(
            "/verify/{user_id}/{unique_string}",
            get(handlers::accounts::verify_email),
        )
        .route("/verified", get(handlers::accounts::verified_page))
        .route("/signing", post(handlers::accounts::sign_in))
        .route(
            "/requestPasswordReset",
            post(handlers::accounts::request_password_reset),
        )
        .route("/resetPassword", post(handlers::accounts::reset_password))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                        .allow_headers(Any),
                ),
        )
}
