//! Skill model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// Self-assessed proficiency, stored as a PostgreSQL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[sqlx(type_name = "proficiency_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl std::fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProficiencyLevel::Beginner => write!(f, "beginner"),
            ProficiencyLevel::Intermediate => write!(f, "intermediate"),
            ProficiencyLevel::Advanced => write!(f, "advanced"),
            ProficiencyLevel::Expert => write!(f, "expert"),
        }
    }
}

/// A skill listed on the public site, grouped by category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Skill {
    /// Unique identifier.
    pub id: Uuid,
    /// Skill name.
    pub name: String,
    /// Grouping category (e.g. "Languages", "Security").
    pub category: String,
    /// Self-assessed proficiency.
    pub proficiency: ProficiencyLevel,
    /// Icon identifier used by the frontend.
    pub icon_name: Option<String>,
    /// Manual ordering key (ascending).
    pub display_order: i32,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

impl Skill {
    /// List all skills in display order.
    pub async fn list_ordered<'e, E>(executor: E) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            r"
            SELECT id, name, category, proficiency, icon_name, display_order, created_at
            FROM skills
            ORDER BY display_order
            ",
        )
        .fetch_all(executor)
        .await
    }
}
