//! Repository port for comment persistence.

use crate::comment::domain::{Comment, CommentId, EmailAddress};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for comment repository operations.
pub type CommentRepositoryResult<T> = Result<T, CommentRepositoryError>;

/// Comment persistence contract.
///
/// Both storage backends (JSON file and `PostgreSQL`) implement this trait
/// and must be indistinguishable to callers.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Prepares the backend for use: creates the store file or the database
    /// table when missing.
    ///
    /// Invoked exactly once at process startup; never as an import-time side
    /// effect.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::Persistence`] when the backend
    /// cannot be prepared. Startup must abort on failure.
    async fn initialize(&self) -> CommentRepositoryResult<()>;

    /// Stores a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::DuplicateEmail`] when the email
    /// address already belongs to a stored comment.
    async fn insert(&self, comment: &Comment) -> CommentRepositoryResult<()>;

    /// Persists the full replacement content of an existing comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::NotFound`] when the comment does
    /// not exist, or [`CommentRepositoryError::DuplicateEmail`] when the
    /// replacement email belongs to another comment.
    async fn update(&self, comment: &Comment) -> CommentRepositoryResult<()>;

    /// Finds a comment by identifier.
    ///
    /// Returns `None` when the comment does not exist.
    async fn find_by_id(&self, id: CommentId) -> CommentRepositoryResult<Option<Comment>>;

    /// Finds a comment by email address.
    ///
    /// Returns `None` when no comment has the given email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> CommentRepositoryResult<Option<Comment>>;

    /// Returns all stored comments ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::Persistence`] when the backend is
    /// unreachable. An empty store is `Ok(vec![])`, never an error; storage
    /// failure is never reported as an empty result.
    async fn list_all(&self) -> CommentRepositoryResult<Vec<Comment>>;

    /// Removes a comment by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::NotFound`] when the comment does
    /// not exist. Deleting an already-deleted comment reports `NotFound`
    /// again, not success.
    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<()>;
}

/// Errors returned by comment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CommentRepositoryError {
    /// A comment with the same email address already exists.
    #[error("a comment with email '{0}' already exists")]
    DuplicateEmail(EmailAddress),

    /// The comment was not found.
    #[error("comment not found: {0}")]
    NotFound(CommentId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CommentRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted records.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
