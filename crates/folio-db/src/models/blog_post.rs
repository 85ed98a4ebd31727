//! Blog post model.
//!
//! Only published posts are exposed through the content API; drafts stay
//! visible to the owner's tooling alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// A blog post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BlogPost {
    /// Unique identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Short summary shown in the listing.
    pub excerpt: String,
    /// Full post body (HTML from the owner's editor).
    pub content: String,
    /// Header image URL, if uploaded.
    pub image_url: Option<String>,
    /// Topic tags.
    pub tags: Vec<String>,
    /// Whether the post is publicly visible.
    pub published: bool,
    /// URL slug, unique across posts.
    pub slug: String,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last edited.
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// List published posts, newest first.
    pub async fn list_published<'e, E>(executor: E) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            r"
            SELECT id, title, excerpt, content, image_url, tags, published,
                   slug, created_at, updated_at
            FROM blog_posts
            WHERE published = true
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(executor)
        .await
    }

    /// Fetch a single published post by slug.
    pub async fn find_published_by_slug<'e, E>(
        executor: E,
        slug: &str,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            r"
            SELECT id, title, excerpt, content, image_url, tags, published,
                   slug, created_at, updated_at
            FROM blog_posts
            WHERE published = true AND slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(executor)
        .await
    }
}
