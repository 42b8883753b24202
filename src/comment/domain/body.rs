//! Validated comment text type.

use super::CommentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length for comment text after trimming.
const MIN_COMMENT_LENGTH: usize = 5;

/// Maximum length for comment text, matching the `VARCHAR(255)` column.
const MAX_COMMENT_LENGTH: usize = 255;

/// Validated comment text.
///
/// The stored value never carries leading or trailing whitespace; trimming
/// happens before the length bounds are applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentBody(String);

impl CommentBody {
    /// Creates validated comment text from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`CommentDomainError::EmptyComment`] when the value is empty
    /// after trimming, or [`CommentDomainError::CommentOutOfBounds`] when
    /// the trimmed value falls outside 5 to 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, CommentDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(CommentDomainError::EmptyComment);
        }

        let length = trimmed.chars().count();
        if !(MIN_COMMENT_LENGTH..=MAX_COMMENT_LENGTH).contains(&length) {
            return Err(CommentDomainError::CommentOutOfBounds);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the comment text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CommentBody {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CommentBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
