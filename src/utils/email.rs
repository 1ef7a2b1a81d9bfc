//! Outbound email. The SMTP transport is constructed once at startup and
//! injected behind the `Mailer` trait so tests can capture outgoing mail.

use anyhow::Result;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::Config;

/// A fully rendered message ready for hand-off to the transport.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

pub trait Mailer: Send + Sync {
    fn send(&self, email: &OutgoingEmail) -> Result<()>;
}

pub struct SmtpMailer {
    mailer: SmtpTransport,
    from_address: String,
    skip_send: bool,
}

impl SmtpMailer {
    pub fn new(config: &Config) -> Result<Self> {
        let mailer = if config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );
            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from_address: config.smtp_from_address.clone(),
            skip_send: config.smtp_skip_send,
        })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &OutgoingEmail) -> Result<()> {
        if self.skip_send {
            tracing::debug!(to = %email.to, subject = %email.subject, "SMTP send skipped");
            return Ok(());
        }

        let message = Message::builder()
            .from(self.from_address.parse()?)
            .to(email.to.parse()?)
            .subject(&email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())?;

        self.mailer.send(&message)?;
        Ok(())
    }
}
