//! Certification model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// A certification or CTF result shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Certification {
    /// Unique identifier.
    pub id: Uuid,
    /// Certification title.
    pub title: String,
    /// Issuing organization or event.
    pub issuer: String,
    /// Date of issue.
    pub issue_date: NaiveDate,
    /// Issuer-assigned credential ID.
    pub credential_id: Option<String>,
    /// Verification URL.
    pub credential_url: Option<String>,
    /// Badge image URL, if uploaded.
    pub image_url: Option<String>,
    /// Kind of entry ("professional" or "ctf"), stored as plain text.
    pub certification_type: String,
    /// Manual ordering key (ascending).
    pub display_order: i32,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

impl Certification {
    /// List all certifications in display order.
    pub async fn list_ordered<'e, E>(executor: E) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            r"
            SELECT id, title, issuer, issue_date, credential_id, credential_url,
                   image_url, certification_type, display_order, created_at
            FROM certifications
            ORDER BY display_order
            ",
        )
        .fetch_all(executor)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certification_type_serializes_as_plain_text() {
        let cert = Certification {
            id: Uuid::new_v4(),
            title: "OSCP".to_string(),
            issuer: "OffSec".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            credential_id: None,
            credential_url: None,
            image_url: None,
            certification_type: "ctf".to_string(),
            display_order: 1,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&cert).unwrap();
        assert_eq!(json["certification_type"], "ctf");
        assert_eq!(json["title"], "OSCP");
    }
}
