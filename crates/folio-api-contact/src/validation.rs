//! Field validation for contact form submissions.
//!
//! Checks run in a fixed order (name, email, message) and stop at the
//! first violation, so the client always sees a single error naming the
//! offending field. Passing input is returned in normalized form: name
//! and message trimmed, email trimmed and lowercased.

use std::fmt;
use std::sync::LazyLock;

use crate::models::SubmissionInput;

/// Maximum accepted name length in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Maximum accepted email length in characters.
pub const MAX_EMAIL_CHARS: usize = 255;

/// Maximum accepted message length in characters.
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Shape check for email addresses: non-blank local part, `@`, domain
/// containing at least one dot. Deliverability is not verified.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX is a valid regex pattern")
});

/// A single validation error with field information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field name that failed validation.
    pub field: String,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A submission that passed validation, with normalized fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    /// Trimmed display name.
    pub name: String,
    /// Trimmed, lowercased address.
    pub email: String,
    /// Trimmed message body.
    pub message: String,
}

/// Validate the name field.
///
/// Emptiness is judged after trimming; the length cap applies to the
/// raw input.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::new(
            "name",
            "length_range",
            "Name must be between 1 and 100 characters",
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate the email field, returning the normalized address.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    if email.chars().count() > MAX_EMAIL_CHARS {
        return Err(ValidationError::new(
            "email",
            "too_long",
            "Email must be less than 255 characters",
        ));
    }

    let normalized = email.trim().to_lowercase();
    if !EMAIL_REGEX.is_match(&normalized) {
        return Err(ValidationError::new(
            "email",
            "invalid_format",
            "Invalid email format",
        ));
    }

    Ok(normalized)
}

/// Validate the message field.
pub fn validate_message(message: &str) -> Result<String, ValidationError> {
    let trimmed = message.trim();
    if trimmed.is_empty() || message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::new(
            "message",
            "length_range",
            "Message must be between 1 and 1000 characters",
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate a full submission, stopping at the first violated field.
pub fn validate_submission(input: &SubmissionInput) -> Result<ValidSubmission, ValidationError> {
    let name = validate_name(&input.name)?;
    let email = validate_email(&input.email)?;
    let message = validate_message(&input.message)?;

    Ok(ValidSubmission {
        name,
        email,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(name: &str, email: &str, message: &str) -> SubmissionInput {
        SubmissionInput {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_submission_is_normalized() {
        let result = validate_submission(&input(
            "  Jane Doe  ",
            " Jane.Doe@Example.COM ",
            "  Hello from the form  ",
        ))
        .unwrap();

        assert_eq!(result.name, "Jane Doe");
        assert_eq!(result.email, "jane.doe@example.com");
        assert_eq!(result.message, "Hello from the form");
    }

    #[test]
    fn empty_name_rejected() {
        let err = validate_name("   ").unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "Name must be between 1 and 100 characters");
    }

    #[test]
    fn name_length_boundary() {
        assert!(validate_name(&"a".repeat(100)).is_ok());

        let err = validate_name(&"a".repeat(101)).unwrap_err();
        assert_eq!(err.code, "length_range");
    }

    #[test]
    fn email_over_length_cap_rejected() {
        let local = "a".repeat(250);
        let err = validate_email(&format!("{local}@ex.com")).unwrap_err();
        assert_eq!(err.code, "too_long");
        assert_eq!(err.message, "Email must be less than 255 characters");
    }

    #[test]
    fn malformed_emails_rejected() {
        for email in ["", "plainaddress", "missing@dot", "@nodomain.com", "a b@c.de"] {
            let err = validate_email(email).unwrap_err();
            assert_eq!(err.message, "Invalid email format", "input: {email:?}");
        }
    }

    #[test]
    fn email_normalization_is_idempotent() {
        let once = validate_email(" User@Example.COM ").unwrap();
        let twice = validate_email(&once).unwrap();
        assert_eq!(once, "user@example.com");
        assert_eq!(once, twice);
    }

    #[test]
    fn message_length_boundary() {
        assert!(validate_message(&"x".repeat(1000)).is_ok());

        let err = validate_message(&"x".repeat(1001)).unwrap_err();
        assert_eq!(
            err.message,
            "Message must be between 1 and 1000 characters"
        );
    }

    #[test]
    fn empty_message_rejected() {
        let err = validate_message("").unwrap_err();
        assert_eq!(err.field, "message");
    }

    #[test]
    fn first_violation_wins() {
        // name and email both invalid; the name error is reported
        let err = validate_submission(&input("", "not-an-email", "hi")).unwrap_err();
        assert_eq!(err.field, "name");

        // email and message both invalid; the email error is reported
        let err = validate_submission(&input("Jane", "not-an-email", "")).unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn display_includes_field_and_message() {
        let err = ValidationError::new("email", "invalid_format", "Invalid email format");
        assert_eq!(err.to_string(), "email: Invalid email format");
    }
}
