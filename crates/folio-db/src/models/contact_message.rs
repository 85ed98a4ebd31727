//! Contact form submission model.
//!
//! Submissions are append-only: the intake gateway inserts them, nothing in
//! the backend updates or deletes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// One persisted contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactMessage {
    /// Unique identifier.
    pub id: Uuid,
    /// Sender display name.
    pub name: String,
    /// Sender address, stored trimmed and lowercased.
    pub email: String,
    /// Message body.
    pub message: String,
    /// When the submission was accepted.
    pub created_at: DateTime<Utc>,
}

/// Input for persisting a validated submission.
#[derive(Debug, Clone)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Insert a new submission row.
    pub async fn create<'e, E>(
        executor: E,
        input: CreateContactMessage,
    ) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            r"
            INSERT INTO contact_messages (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            ",
        )
        .bind(input.name)
        .bind(input.email)
        .bind(input.message)
        .fetch_one(executor)
        .await
    }

    /// Count submissions for an email address created at or after `since`.
    ///
    /// The caller passes the normalized (trimmed, lowercased) address; rows
    /// are stored the same way, so the comparison is exact regardless of the
    /// casing the client submitted.
    pub async fn count_since_for_email<'e, E>(
        executor: E,
        email: &str,
        since: DateTime<Utc>,
    ) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM contact_messages
            WHERE email = $1 AND created_at >= $2
            ",
        )
        .bind(email)
        .bind(since)
        .fetch_one(executor)
        .await
    }
}
