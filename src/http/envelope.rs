//! Response envelope wire types.
//!
//! Every response carries the same wrapper:
//! `{success, statusCode, message?, data?, error?: {message, details?}}`.
//! The field names and optionality are a compatibility contract and must
//! not change.

use crate::comment::domain::Comment;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Uniform response wrapper returned on every request.
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope<T: Serialize> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// HTTP status code, duplicated into the body.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Human-readable success message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Operation payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error description on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// Error description carried inside a failure envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub message: String,
    /// Optional supporting detail; never a raw stack trace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Wire representation of one comment.
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    /// Comment identifier.
    pub id: Uuid,
    /// Commenter display name.
    pub name: String,
    /// Commenter email address.
    pub email: String,
    /// Comment text.
    pub comment: String,
    /// Creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id().into_inner(),
            name: comment.name().as_str().to_owned(),
            email: comment.email().as_str().to_owned(),
            comment: comment.body().as_str().to_owned(),
            created_at: comment.created_at(),
            updated_at: comment.updated_at(),
        }
    }
}

/// Builds a success response with the given status, message, and payload.
#[must_use]
pub fn success<T: Serialize>(status: StatusCode, message: &str, data: Option<T>) -> Response {
    let envelope = ResponseEnvelope {
        success: true,
        status_code: status.as_u16(),
        message: Some(message.to_owned()),
        data,
        error: None,
    };
    (status, Json(envelope)).into_response()
}

/// Builds a failure response with the given status, message, and detail.
#[must_use]
pub fn failure(status: StatusCode, message: &str, details: Option<String>) -> Response {
    let envelope: ResponseEnvelope<()> = ResponseEnvelope {
        success: false,
        status_code: status.as_u16(),
        message: None,
        data: None,
        error: Some(ErrorBody {
            message: message.to_owned(),
            details,
        }),
    };
    (status, Json(envelope)).into_response()
}
