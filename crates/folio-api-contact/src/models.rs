//! Request and response bodies for the contact endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw contact form submission as sent by the client.
///
/// Absent fields default to empty strings, so validation reports the
/// specific missing field instead of a generic body error.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmissionInput {
    /// Sender display name.
    #[serde(default)]
    pub name: String,
    /// Sender email address.
    #[serde(default)]
    pub email: String,
    /// Message body.
    #[serde(default)]
    pub message: String,
}

/// Body returned when a submission is accepted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmitResponse {
    /// Always `true` on success.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}
