//! Portfolio project model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// A showcased project on the public site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Project {
    /// Unique identifier.
    pub id: Uuid,
    /// Project title.
    pub title: String,
    /// Short description shown on the project card.
    pub description: String,
    /// Cover image URL, if uploaded.
    pub image_url: Option<String>,
    /// Live demo URL.
    pub demo_url: Option<String>,
    /// Source repository URL.
    pub github_url: Option<String>,
    /// Technology tags.
    pub technologies: Vec<String>,
    /// Whether the project is featured on the landing page.
    pub featured: bool,
    /// Manual ordering key (ascending).
    pub display_order: i32,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last edited.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// List all projects in display order.
    pub async fn list_ordered<'e, E>(executor: E) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            r"
            SELECT id, title, description, image_url, demo_url, github_url,
                   technologies, featured, display_order, created_at, updated_at
            FROM projects
            ORDER BY display_order
            ",
        )
        .fetch_all(executor)
        .await
    }
}
