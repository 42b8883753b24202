//! Error types for comment domain validation.

use thiserror::Error;

/// Errors returned while constructing comment domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentDomainError {
    /// The commenter name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The commenter name is outside the 3 to 50 character bounds.
    #[error("name must be between 3 and 50 characters: {0}")]
    NameOutOfBounds(String),

    /// The email address is empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,

    /// The email address does not match the `local@domain.tld` shape.
    #[error("email '{0}' is not a valid email address")]
    InvalidEmailFormat(String),

    /// The email address local part does not start with a letter.
    #[error("email '{0}' must start with a letter")]
    EmailMustStartWithLetter(String),

    /// The email address exceeds the 254-character storage limit.
    #[error("email exceeds 254 character limit: {0}")]
    EmailTooLong(String),

    /// The comment text is empty after trimming.
    #[error("comment must not be empty or just whitespace")]
    EmptyComment,

    /// The comment text is outside the 5 to 255 character bounds after
    /// trimming.
    #[error("comment must be between 5 and 255 characters")]
    CommentOutOfBounds,
}
