//! Orchestration services for the comment lifecycle.

mod service;

pub use service::{CommentInput, CommentService, CommentServiceError, CommentServiceResult};
