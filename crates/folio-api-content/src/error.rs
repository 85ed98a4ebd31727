//! Error types for the content API.
//!
//! Missing resources map to 404 with a resource-specific message;
//! database failures are logged with their cause and surface only a
//! generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON body returned for every error response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub error: String,
}

/// Errors returned by content read handlers.
#[derive(Debug, thiserror::Error)]
pub enum ContentApiError {
    /// No published blog post carries the requested slug.
    #[error("Post not found")]
    PostNotFound,

    /// No resume file has been uploaded.
    #[error("No resume uploaded")]
    ResumeNotFound,

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ContentApiError {
    /// HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::PostNotFound | Self::ResumeNotFound => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    fn client_message(&self) -> String {
        match self {
            Self::PostNotFound => "Post not found".to_string(),
            Self::ResumeNotFound => "No resume uploaded".to_string(),
            Self::Database(_) => "Failed to process request".to_string(),
        }
    }
}

impl IntoResponse for ContentApiError {
    fn into_response(self) -> Response {
        if let Self::Database(err) = &self {
            tracing::error!(error = %err, "Content read database failure");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}
