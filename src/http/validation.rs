//! Request payload validation for the comment endpoints.
//!
//! Checks run in a fixed order and the first failure short-circuits:
//! shape (no extra fields), presence, name type, email format, comment
//! type. The email check here is the loose transport rule; the stricter
//! leading-letter rule lives in the domain layer and is authoritative.

use crate::comment::services::CommentInput;
use serde_json::{Map, Value};

/// Fields a comment payload may carry.
const ALLOWED_FIELDS: [&str; 3] = ["name", "email", "comment"];

/// A rejected payload, with the message and detail for the error envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadError {
    /// Human-readable error message.
    pub message: String,
    /// Optional supporting detail.
    pub details: Option<String>,
}

impl PayloadError {
    fn new(message: &str, details: Option<&str>) -> Self {
        Self {
            message: message.to_owned(),
            details: details.map(ToOwned::to_owned),
        }
    }
}

/// Validates a raw JSON body into a comment input payload.
///
/// # Errors
///
/// Returns a [`PayloadError`] describing the first failed check.
pub fn validate_comment_payload(body: &Value) -> Result<CommentInput, PayloadError> {
    let Some(object) = body.as_object() else {
        return Err(PayloadError::new(
            "Invalid request body.",
            Some("Request body must be a JSON object."),
        ));
    };

    check_shape(object)?;
    check_presence(object)?;

    let Some(name) = object.get("name").and_then(Value::as_str) else {
        return Err(PayloadError::new(
            "Invalid name.",
            Some("Name is required and must be a string."),
        ));
    };

    let email = object.get("email").and_then(Value::as_str).unwrap_or("");
    if !email_shape_is_valid(email) {
        return Err(PayloadError::new(
            "Invalid email format.",
            Some("Email is required and must be in a valid format."),
        ));
    }

    let Some(comment) = object.get("comment").and_then(Value::as_str) else {
        return Err(PayloadError::new("Comment cannot be empty.", None));
    };

    Ok(CommentInput::new(name, email, comment))
}

fn check_shape(object: &Map<String, Value>) -> Result<(), PayloadError> {
    let has_extra = object
        .keys()
        .any(|key| !ALLOWED_FIELDS.contains(&key.as_str()));
    if has_extra {
        return Err(PayloadError::new("Please remove the extra fields", None));
    }
    Ok(())
}

fn check_presence(object: &Map<String, Value>) -> Result<(), PayloadError> {
    let any_missing = ALLOWED_FIELDS
        .iter()
        .any(|field| is_missing(object.get(*field)));
    if any_missing {
        return Err(PayloadError::new(
            "Missing required fields.",
            Some("Name, email, and comment are required."),
        ));
    }
    Ok(())
}

/// A field is missing when absent, null, or an empty string.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

/// Loose `local@domain.tld` shape check: local part of `[A-Za-z0-9._%+-]`,
/// dot-separated domain with a top-level segment of at least 2 letters.
fn email_shape_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
    if !local_ok {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
        && tld.chars().count() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}
