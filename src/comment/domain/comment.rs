//! Comment aggregate root.

use super::{CommentBody, CommentId, CommenterName, EmailAddress};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A user-submitted comment.
///
/// The aggregate owns its identifier and timestamps; mutation happens only
/// through [`Comment::replace`], which swaps the full mutable content in one
/// step. Partial updates are not supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    name: CommenterName,
    email: EmailAddress,
    body: CommentBody,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCommentData {
    /// Persisted comment identifier.
    pub id: CommentId,
    /// Persisted commenter name.
    pub name: CommenterName,
    /// Persisted commenter email address.
    pub email: EmailAddress,
    /// Persisted comment text.
    pub body: CommentBody,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a new comment with a fresh identifier.
    #[must_use]
    pub fn new(
        name: CommenterName,
        email: EmailAddress,
        body: CommentBody,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: CommentId::new(),
            name,
            email,
            body,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            body: data.body,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the commenter name.
    #[must_use]
    pub const fn name(&self) -> &CommenterName {
        &self.name
    }

    /// Returns the commenter email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the comment text.
    #[must_use]
    pub const fn body(&self) -> &CommentBody {
        &self.body
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the full mutable content and bumps `updated_at`.
    pub fn replace(
        &mut self,
        name: CommenterName,
        email: EmailAddress,
        body: CommentBody,
        clock: &impl Clock,
    ) {
        self.name = name;
        self.email = email;
        self.body = body;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
