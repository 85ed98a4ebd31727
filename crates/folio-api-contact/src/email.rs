//! Outbound email delivery for contact notifications.
//!
//! `EmailSender` abstracts the provider so tests can capture messages
//! without network access. The production implementation posts to the
//! Resend HTTP API.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Resend message submission endpoint.
pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Default sender address for notification email.
pub const DEFAULT_FROM_ADDRESS: &str = "Portfolio Contact <onboarding@resend.dev>";

/// Errors from sending notification email.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// The HTTP request to the provider failed.
    #[error("email request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-success status.
    #[error("email provider returned {status}: {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Sends notification email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver one HTML email to `to`.
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), EmailError>;
}

/// Request body for the Resend API.
#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// `EmailSender` backed by the Resend HTTP API.
pub struct ResendEmailSender {
    client: reqwest::Client,
    api_key: String,
    from: String,
}

impl ResendEmailSender {
    /// Create a sender authenticating with `api_key` and sending from
    /// the `from` address.
    #[must_use]
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            from: from.into(),
        }
    }
}

impl fmt::Debug for ResendEmailSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResendEmailSender")
            .field("api_key", &"[redacted]")
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), EmailError> {
        let request = ResendRequest {
            from: &self.from,
            to: [to],
            subject,
            html,
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(EmailError::Provider { status, body })
        }
    }
}

/// One email captured by `MockEmailSender`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// In-memory `EmailSender` for tests.
#[derive(Debug, Default)]
pub struct MockEmailSender {
    sent: Mutex<Vec<SentEmail>>,
    fail: AtomicBool,
}

impl MockEmailSender {
    /// Create a sender that records every message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sender whose `send` always fails.
    #[must_use]
    pub fn failing() -> Self {
        let sender = Self::new();
        sender.fail.store(true, Ordering::Relaxed);
        sender
    }

    /// Messages sent so far, in order.
    #[must_use]
    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), EmailError> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(EmailError::Provider {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body: "mock failure".to_string(),
            });
        }

        self.sent.lock().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}
