//! Port contracts for comment persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the comment
//! service.

pub mod repository;

pub use repository::{CommentRepository, CommentRepositoryError, CommentRepositoryResult};
