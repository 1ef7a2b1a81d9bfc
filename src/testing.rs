//! Shared fixtures for in-crate unit tests.

use std::sync::{Arc, Mutex};

use sqlx::sqlite::SqlitePoolOptions;

use crate::db::connection::DbPool;
use crate::utils::email::{Mailer, OutgoingEmail};

/// Fresh in-memory database with migrations applied. A single connection
/// keeps every query on the same in-memory instance.
pub async fn memory_pool() -> DbPool {
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

/// Mailer that records outgoing mail so tests can read the one-time strings
/// that would otherwise only exist in a user's inbox. The integration suite
/// carries its own copy under `tests/support`, same name and signature.
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
