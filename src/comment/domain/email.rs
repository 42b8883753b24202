//! Validated email address type.

use super::CommentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an email address, matching the `VARCHAR(254)` column.
const MAX_EMAIL_LENGTH: usize = 254;

/// Validated commenter email address.
///
/// The accepted shape is `local@domain.tld`: the local part uses
/// `[A-Za-z0-9._%+-]` and must start with a letter, the domain is
/// dot-separated with a top-level segment of at least 2 letters. The
/// leading-letter rule is the persistence-layer rule and is authoritative
/// when looser transport-level checks disagree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// The input is trimmed; case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CommentDomainError::EmptyEmail`] when the value is empty
    /// after trimming, [`CommentDomainError::EmailTooLong`] when it exceeds
    /// 254 characters, [`CommentDomainError::EmailMustStartWithLetter`] when
    /// the local part does not begin with a letter, or
    /// [`CommentDomainError::InvalidEmailFormat`] when the shape is not
    /// `local@domain.tld`.
    pub fn new(value: impl Into<String>) -> Result<Self, CommentDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(CommentDomainError::EmptyEmail);
        }

        if trimmed.chars().count() > MAX_EMAIL_LENGTH {
            return Err(CommentDomainError::EmailTooLong(raw.clone()));
        }

        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(CommentDomainError::InvalidEmailFormat(raw.clone()));
        };

        if !local_part_is_valid(local) {
            return Err(CommentDomainError::InvalidEmailFormat(raw.clone()));
        }

        if !local.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(CommentDomainError::EmailMustStartWithLetter(raw.clone()));
        }

        if !domain_part_is_valid(domain) {
            return Err(CommentDomainError::InvalidEmailFormat(raw.clone()));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Checks the local part: non-empty, `[A-Za-z0-9._%+-]` only.
fn local_part_is_valid(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
}

/// Checks the domain part: non-empty dot-separated labels of
/// `[A-Za-z0-9-]`, with a final top-level label of at least 2 letters.
fn domain_part_is_valid(domain: &str) -> bool {
    let mut labels = domain.split('.');

    let Some(tld) = labels.next_back() else {
        return false;
    };
    if tld.chars().count() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    let mut label_count = 0;
    for label in labels {
        if label.is_empty() || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }
        label_count += 1;
    }
    label_count >= 1
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
