//! Portfolio section endpoints.
//!
//! GET /api/projects, /api/skills, /api/certifications, /api/achievements -
//! each returns every row of its table ordered by `display_order`.

use axum::{Extension, Json};
use folio_db::models::{Achievement, Certification, Project, Skill};
use folio_db::DbPool;

use crate::error::{ContentApiError, ErrorBody};

/// List portfolio projects.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "content",
    responses(
        (status = 200, description = "All projects in display order", body = Vec<Project>),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn list_projects_handler(
    Extension(pool): Extension<DbPool>,
) -> Result<Json<Vec<Project>>, ContentApiError> {
    let projects = Project::list_ordered(pool.inner()).await?;
    Ok(Json(projects))
}

/// List skills.
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "content",
    responses(
        (status = 200, description = "All skills in display order", body = Vec<Skill>),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn list_skills_handler(
    Extension(pool): Extension<DbPool>,
) -> Result<Json<Vec<Skill>>, ContentApiError> {
    let skills = Skill::list_ordered(pool.inner()).await?;
    Ok(Json(skills))
}

/// List certifications.
#[utoipa::path(
    get,
    path = "/api/certifications",
    tag = "content",
    responses(
        (status = 200, description = "All certifications in display order", body = Vec<Certification>),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn list_certifications_handler(
    Extension(pool): Extension<DbPool>,
) -> Result<Json<Vec<Certification>>, ContentApiError> {
    let certifications = Certification::list_ordered(pool.inner()).await?;
    Ok(Json(certifications))
}

/// List achievements.
#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = "content",
    responses(
        (status = 200, description = "All achievements in display order", body = Vec<Achievement>),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn list_achievements_handler(
    Extension(pool): Extension<DbPool>,
) -> Result<Json<Vec<Achievement>>, ContentApiError> {
    let achievements = Achievement::list_ordered(pool.inner()).await?;
    Ok(Json(achievements))
}
