//! Achievement model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// A dated achievement shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Achievement {
    /// Unique identifier.
    pub id: Uuid,
    /// Achievement title.
    pub title: String,
    /// Description of the achievement.
    pub description: String,
    /// When the achievement happened.
    pub date: NaiveDate,
    /// Icon identifier used by the frontend.
    pub icon_name: Option<String>,
    /// Illustration image URL, if uploaded.
    pub image_url: Option<String>,
    /// Manual ordering key (ascending).
    pub display_order: i32,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

impl Achievement {
    /// List all achievements in display order.
    pub async fn list_ordered<'e, E>(executor: E) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            r"
            SELECT id, title, description, date, icon_name, image_url,
                   display_order, created_at
            FROM achievements
            ORDER BY display_order
            ",
        )
        .fetch_all(executor)
        .await
    }
}
