//! In-memory repository for comment service tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::comment::{
    domain::{Comment, CommentId, EmailAddress},
    ports::{CommentRepository, CommentRepositoryError, CommentRepositoryResult},
};

/// Thread-safe in-memory comment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    comments: HashMap<CommentId, Comment>,
    email_index: HashMap<EmailAddress, CommentId>,
}

impl InMemoryCommentStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentStore {
    async fn initialize(&self) -> CommentRepositoryResult<()> {
        Ok(())
    }

    async fn insert(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.email_index.contains_key(comment.email()) {
            return Err(CommentRepositoryError::DuplicateEmail(
                comment.email().clone(),
            ));
        }

        state
            .email_index
            .insert(comment.email().clone(), comment.id());
        state.comments.insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_email = state
            .comments
            .get(&comment.id())
            .ok_or(CommentRepositoryError::NotFound(comment.id()))?
            .email()
            .clone();

        if *comment.email() != old_email {
            if let Some(&indexed_id) = state.email_index.get(comment.email())
                && indexed_id != comment.id()
            {
                return Err(CommentRepositoryError::DuplicateEmail(
                    comment.email().clone(),
                ));
            }
            state.email_index.remove(&old_email);
            state
                .email_index
                .insert(comment.email().clone(), comment.id());
        }

        state.comments.insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: CommentId) -> CommentRepositoryResult<Option<Comment>> {
        let state = self.state.read().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.comments.get(&id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> CommentRepositoryResult<Option<Comment>> {
        let state = self.state.read().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let comment = state
            .email_index
            .get(email)
            .and_then(|id| state.comments.get(id))
            .cloned();
        Ok(comment)
    }

    async fn list_all(&self) -> CommentRepositoryResult<Vec<Comment>> {
        let state = self.state.read().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut comments: Vec<Comment> = state.comments.values().cloned().collect();
        comments.sort_by_key(|c| (c.created_at(), c.id()));
        Ok(comments)
    }

    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let removed = state
            .comments
            .remove(&id)
            .ok_or(CommentRepositoryError::NotFound(id))?;
        state.email_index.remove(removed.email());
        Ok(())
    }
}
