//! Resume file metadata model.
//!
//! The file itself lives in object storage; this table only records where
//! the latest upload is and what it is called.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// Metadata for an uploaded resume file.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResumeFile {
    /// Unique identifier.
    pub id: Uuid,
    /// Public download URL.
    pub file_url: String,
    /// Original file name.
    pub file_name: String,
    /// Size in bytes, when known.
    pub file_size: Option<i64>,
    /// When this version was uploaded.
    pub updated_at: DateTime<Utc>,
}

impl ResumeFile {
    /// Fetch the most recently uploaded resume, if any.
    pub async fn latest<'e, E>(executor: E) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            r"
            SELECT id, file_url, file_name, file_size, updated_at
            FROM resume
            ORDER BY updated_at DESC
            LIMIT 1
            ",
        )
        .fetch_optional(executor)
        .await
    }
}
