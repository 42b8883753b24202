//! Validated commenter name type.

use super::CommentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length for a commenter name.
const MIN_NAME_LENGTH: usize = 3;

/// Maximum length for a commenter name, matching the `VARCHAR(50)` column.
const MAX_NAME_LENGTH: usize = 50;

/// Validated commenter display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommenterName(String);

impl CommenterName {
    /// Creates a validated commenter name.
    ///
    /// The input is trimmed before the length bounds are checked.
    ///
    /// # Errors
    ///
    /// Returns [`CommentDomainError::EmptyName`] when the value is empty
    /// after trimming, or [`CommentDomainError::NameOutOfBounds`] when it
    /// falls outside 3 to 50 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, CommentDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(CommentDomainError::EmptyName);
        }

        let length = trimmed.chars().count();
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
            return Err(CommentDomainError::NameOutOfBounds(raw.clone()));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CommenterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CommenterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
