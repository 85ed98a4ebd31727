//! Contact submission endpoint handler.
//!
//! POST /api/contact - Accept a contact form message.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, Extension, Json};

use crate::error::{ContactApiError, ErrorBody};
use crate::models::{SubmissionInput, SubmitResponse};
use crate::service::ContactService;

/// Submit a contact form message.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmissionInput,
    responses(
        (status = 200, description = "Message accepted", body = SubmitResponse),
        (status = 400, description = "Malformed JSON or invalid field", body = ErrorBody),
        (status = 429, description = "Rate limit exceeded", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn submit_contact_handler(
    Extension(service): Extension<Arc<ContactService>>,
    payload: Result<Json<SubmissionInput>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ContactApiError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected unparseable contact payload");
        ContactApiError::InvalidBody
    })?;

    service.submit(&input).await?;

    Ok(Json(SubmitResponse {
        success: true,
        message: "Message received".to_string(),
    }))
}
