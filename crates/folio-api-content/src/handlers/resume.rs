//! Resume endpoint.
//!
//! GET /api/resume - Fetch the most recently updated resume file record.

use axum::{Extension, Json};
use folio_db::models::ResumeFile;
use folio_db::DbPool;

use crate::error::{ContentApiError, ErrorBody};

/// Fetch the current resume.
#[utoipa::path(
    get,
    path = "/api/resume",
    tag = "content",
    responses(
        (status = 200, description = "The most recently updated resume", body = ResumeFile),
        (status = 404, description = "No resume uploaded", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn get_resume_handler(
    Extension(pool): Extension<DbPool>,
) -> Result<Json<ResumeFile>, ContentApiError> {
    let resume = ResumeFile::latest(pool.inner())
        .await?
        .ok_or(ContentApiError::ResumeNotFound)?;
    Ok(Json(resume))
}
