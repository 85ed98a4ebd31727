//! Error types for contact intake.
//!
//! Every error serializes to the same wire shape, `{"error": "..."}`.
//! Rate-limit errors additionally carry a `Retry-After` header. Database
//! failures are logged with their cause and surface only a generic
//! message.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::validation::ValidationError;

/// JSON body returned for every error response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub error: String,
}

/// Errors returned by the contact intake pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ContactApiError {
    /// The request body could not be parsed as JSON.
    #[error("Invalid JSON in request body")]
    InvalidBody,

    /// A field failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The client exhausted its request window.
    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    TooManyRequests { retry_after_secs: u64 },

    /// The sender address exhausted its stored-submission window.
    #[error("Submission limit exceeded, retry after {retry_after_secs}s")]
    TooManySubmissions { retry_after_secs: u64 },

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ContactApiError {
    /// HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::TooManyRequests { .. } | Self::TooManySubmissions { .. } => {
                StatusCode::TOO_MANY_REQUESTS
            }
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    fn client_message(&self) -> String {
        match self {
            Self::InvalidBody => "Invalid JSON in request body".to_string(),
            Self::Validation(err) => err.message.clone(),
            Self::TooManyRequests { .. } => {
                "Too many requests. Please try again later.".to_string()
            }
            Self::TooManySubmissions { .. } => {
                "Too many messages submitted. Please try again later.".to_string()
            }
            Self::Database(_) => "Failed to process request".to_string(),
        }
    }

    /// `Retry-After` value in seconds, for rate-limit errors.
    fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::TooManyRequests { retry_after_secs }
            | Self::TooManySubmissions { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        }
    }
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> Response {
        if let Self::Database(err) = &self {
            tracing::error!(error = %err, "Contact intake database failure");
        }

        let status = self.status_code();
        let retry_after = self.retry_after_secs();
        let body = ErrorBody {
            error: self.client_message(),
        };

        let mut response = (status, Json(body)).into_response();
        if let Some(secs) = retry_after {
            if let Ok(value) = HeaderValue::from_str(&secs.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn response_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            ContactApiError::InvalidBody.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ContactApiError::TooManyRequests {
                retry_after_secs: 10
            }
            .status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ContactApiError::TooManySubmissions {
                retry_after_secs: 3600
            }
            .status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[tokio::test]
    async fn invalid_body_response_shape() {
        let response = ContactApiError::InvalidBody.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["error"], "Invalid JSON in request body");
    }

    #[tokio::test]
    async fn validation_response_carries_field_message() {
        let err = ContactApiError::Validation(ValidationError::new(
            "email",
            "invalid_format",
            "Invalid email format",
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["error"], "Invalid email format");
    }

    #[tokio::test]
    async fn too_many_requests_sets_retry_after() {
        let response = ContactApiError::TooManyRequests {
            retry_after_secs: 1800,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).unwrap(),
            "1800"
        );

        let body = response_json(response).await;
        assert_eq!(body["error"], "Too many requests. Please try again later.");
    }

    #[tokio::test]
    async fn too_many_submissions_sets_retry_after() {
        let response = ContactApiError::TooManySubmissions {
            retry_after_secs: 3600,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).unwrap(),
            "3600"
        );

        let body = response_json(response).await;
        assert_eq!(
            body["error"],
            "Too many messages submitted. Please try again later."
        );
    }

    #[tokio::test]
    async fn database_error_is_generic() {
        let response = ContactApiError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::RETRY_AFTER).is_none());

        let body = response_json(response).await;
        assert_eq!(body["error"], "Failed to process request");
    }
}
