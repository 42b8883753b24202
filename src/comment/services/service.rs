//! Service layer for the comment lifecycle.
//!
//! Provides [`CommentService`] which coordinates validation, email
//! uniqueness pre-checks, and repository calls for creating, listing,
//! updating, and deleting comments.

use crate::comment::{
    domain::{Comment, CommentBody, CommentDomainError, CommentId, CommenterName, EmailAddress},
    ports::{CommentRepository, CommentRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Full comment content supplied by a caller.
///
/// Both create and edit take the same shape: edits replace the whole
/// mutable content, never a subset of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentInput {
    name: String,
    email: String,
    comment: String,
}

impl CommentInput {
    /// Creates an input payload from raw strings.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            comment: comment.into(),
        }
    }
}

/// Service-level errors for comment operations.
#[derive(Debug, Error)]
pub enum CommentServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CommentDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CommentRepositoryError),
}

/// Result type for comment service operations.
pub type CommentServiceResult<T> = Result<T, CommentServiceError>;

/// Comment lifecycle orchestration service.
///
/// Generic over the repository so the storage backend can be chosen from
/// configuration at runtime (`R = dyn CommentRepository`) while unit tests
/// instantiate it with a concrete adapter.
pub struct CommentService<R, C>
where
    R: CommentRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for CommentService<R, C>
where
    R: CommentRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> CommentService<R, C>
where
    R: CommentRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new comment service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns all stored comments ordered by creation time.
    ///
    /// An empty store yields `Ok(vec![])`; storage failure yields an error,
    /// so callers can always tell the two apart.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_all(&self) -> CommentServiceResult<Vec<Comment>> {
        Ok(self.repository.list_all().await?)
    }

    /// Finds a comment by identifier.
    ///
    /// Returns `Ok(None)` when no comment has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: CommentId) -> CommentServiceResult<Option<Comment>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Reports whether any stored comment uses the given email address.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn email_exists(&self, email: &EmailAddress) -> CommentServiceResult<bool> {
        Ok(self.repository.find_by_email(email).await?.is_some())
    }

    /// Creates a new comment from raw input.
    ///
    /// The input is validated through the domain value types, the email is
    /// pre-checked for uniqueness, and the comment is persisted. The
    /// storage-level uniqueness constraint remains authoritative for the
    /// window between the pre-check and the write.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Domain`] when validation fails, or
    /// [`CommentServiceError::Repository`] with
    /// [`CommentRepositoryError::DuplicateEmail`] when the email is already
    /// in use.
    pub async fn create(&self, input: CommentInput) -> CommentServiceResult<Comment> {
        let (name, email, body) = validate_input(input)?;

        if self.email_exists(&email).await? {
            return Err(CommentRepositoryError::DuplicateEmail(email).into());
        }

        let comment = Comment::new(name, email, body, &*self.clock);
        self.repository.insert(&comment).await?;
        Ok(comment)
    }

    /// Replaces the full content of an existing comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Repository`] with
    /// [`CommentRepositoryError::NotFound`] when the id does not exist,
    /// [`CommentRepositoryError::DuplicateEmail`] when the replacement email
    /// belongs to another comment, or [`CommentServiceError::Domain`] when
    /// validation fails.
    pub async fn update(
        &self,
        id: CommentId,
        input: CommentInput,
    ) -> CommentServiceResult<Comment> {
        let mut comment = self.find_by_id_or_error(id).await?;
        let (name, email, body) = validate_input(input)?;

        if *comment.email() != email && self.email_exists(&email).await? {
            return Err(CommentRepositoryError::DuplicateEmail(email).into());
        }

        comment.replace(name, email, body, &*self.clock);
        self.repository.update(&comment).await?;
        Ok(comment)
    }

    /// Deletes a comment by identifier.
    ///
    /// Deletion is not idempotent-success: deleting an id that no longer
    /// exists reports `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Repository`] with
    /// [`CommentRepositoryError::NotFound`] when the id does not exist.
    pub async fn delete(&self, id: CommentId) -> CommentServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    async fn find_by_id_or_error(&self, id: CommentId) -> CommentServiceResult<Comment> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CommentRepositoryError::NotFound(id).into())
    }
}

/// Builds the validated domain values from raw input.
///
/// Runs even when a transport-level validator already accepted the payload;
/// the domain rules are the authoritative ones.
fn validate_input(
    input: CommentInput,
) -> Result<(CommenterName, EmailAddress, CommentBody), CommentDomainError> {
    let CommentInput {
        name,
        email,
        comment,
    } = input;

    let parsed_name = CommenterName::new(name)?;
    let parsed_email = EmailAddress::new(email)?;
    let parsed_body = CommentBody::new(comment)?;
    Ok((parsed_name, parsed_email, parsed_body))
}
