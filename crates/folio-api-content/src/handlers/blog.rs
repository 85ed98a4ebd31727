//! Blog endpoints.
//!
//! GET /api/blog - List published posts, newest first.
//! GET /api/blog/:slug - Fetch one published post by slug.

use axum::{extract::Path, Extension, Json};
use folio_db::models::BlogPost;
use folio_db::DbPool;

use crate::error::{ContentApiError, ErrorBody};

/// List published blog posts, newest first.
///
/// Drafts are never returned.
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "content",
    responses(
        (status = 200, description = "Published posts, newest first", body = Vec<BlogPost>),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn list_blog_posts_handler(
    Extension(pool): Extension<DbPool>,
) -> Result<Json<Vec<BlogPost>>, ContentApiError> {
    let posts = BlogPost::list_published(pool.inner()).await?;
    Ok(Json(posts))
}

/// Fetch a published blog post by slug.
///
/// Unpublished posts are indistinguishable from absent ones.
#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "content",
    params(
        ("slug" = String, Path, description = "URL slug of the post")
    ),
    responses(
        (status = 200, description = "The published post", body = BlogPost),
        (status = 404, description = "No published post with this slug", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn get_blog_post_handler(
    Extension(pool): Extension<DbPool>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ContentApiError> {
    let post = BlogPost::find_published_by_slug(pool.inner(), &slug)
        .await?
        .ok_or(ContentApiError::PostNotFound)?;
    Ok(Json(post))
}
