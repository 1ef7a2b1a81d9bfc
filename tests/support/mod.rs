#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use gatekeeper_backend::{
    app,
    config::Config,
    db::connection::DbPool,
    state::AppState,
    utils::email::{Mailer, OutgoingEmail},
};

/// Mailer that records outgoing mail so tests can read the one-time strings
/// that would otherwise only exist in a user's inbox. The in-crate unit
/// tests carry their own copy in `src/testing.rs`, same name and signature.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().expect("mailer lock").clone()
    }

    /// One-time string from the link in the most recent email.
    pub fn last_token(&self) -> String {
        let sent = self.sent.lock().expect("mailer lock");
        let body = &sent.last().expect("an email was sent").html_body;
        let start = body.find("href=\"").expect("link in email") + "href=\"".len();
        let end = start + body[start..].find('"').expect("closing quote");
        body[start..end]
            .rsplit('/')
            .next()
            .expect("token segment")
            .to_string()
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        self.sent.lock().expect("mailer lock").push(email.clone());
        Ok(())
    }
}

/// Mailer whose every send fails, for exercising the relay-down path.
#[derive(Clone, Default)]
pub struct FailingMailer;

impl Mailer for FailingMailer {
    fn send(&self, _email: &OutgoingEmail) -> anyhow::Result<()> {
        anyhow::bail!("relay down")
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".into(),
        port: 3000,
        app_url: "http://localhost:3000".into(),
        smtp_host: "localhost".into(),
        smtp_port: 587,
        smtp_username: String::new(),
        smtp_password: String::new(),
        smtp_from_address: "noreply@gatekeeper.local".into(),
        smtp_skip_send: true,
    }
}

pub async fn test_pool() -> DbPool {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    pool
}

pub struct TestApp {
    pub app: Router,
    pub pool: DbPool,
    pub mailer: RecordingMailer,
}

pub async fn test_app() -> TestApp {
    let pool = test_pool().await;
    let mailer = RecordingMailer::default();
    let state = AppState::new(pool.clone(), test_config(), Arc::new(mailer.clone()));
    TestApp {
        app: app(state),
        pool,
        mailer,
    }
}

/// App wired to a mailer that cannot deliver anything.
pub async fn test_app_with_failing_mailer() -> (Router, DbPool) {
    let pool = test_pool().await;
    let state = AppState::new(pool.clone(), test_config(), Arc::new(FailingMailer));
    (app(state), pool)
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Value {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");
    let response = app.clone().oneshot(request).await.expect("send request");
    assert_eq!(
        response.status(),
        StatusCode::OK,
        "account endpoints always answer 200; callers inspect the envelope"
    );
    body_json(response).await
}

pub async fn get_response(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    app.clone().oneshot(request).await.expect("send request")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect location")
        .to_str()
        .expect("ascii location")
        .to_string()
}

pub fn signup_payload(email: &str) -> Value {
    json!({
        "name": "Jane Doe",
        "email": email,
        "password": "longenough1",
        "dateOfBirth": "1990-01-01",
        "phoneNumber": "555",
        "address": "1 Main St"
    })
}

/// Drives a full signup, asserting the Pending envelope.
pub async fn sign_up(test: &TestApp, email: &str) {
    let body = post_json(&test.app, "/signup", signup_payload(email)).await;
    assert_eq!(body["status"], "Pending", "signup envelope: {body}");
}

/// Drives signup plus verification via the emailed link.
pub async fn sign_up_verified(test: &TestApp, email: &str) -> String {
    sign_up(test, email).await;
    let user_id = user_id_by_email(&test.pool, email).await;
    let token = test.mailer.last_token();
    let response = get_response(&test.app, &format!("/verify/{user_id}/{token}")).await;
    assert_eq!(location(&response), "/verified");
    user_id
}

pub async fn user_id_by_email(pool: &DbPool, email: &str) -> String {
    sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("user id")
}

pub async fn count(pool: &DbPool, sql: &str, bind: &str) -> i64 {
    sqlx::query_scalar(sql)
        .bind(bind)
        .fetch_one(pool)
        .await
        .expect("count")
}
