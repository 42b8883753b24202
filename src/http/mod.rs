//! HTTP surface for the comment API.
//!
//! Maps HTTP requests to comment service calls and service outcomes to the
//! uniform response envelope.

pub mod envelope;
pub mod handlers;
pub mod router;
pub mod validation;

use crate::comment::ports::CommentRepository;
use crate::comment::services::CommentService;
use mockable::DefaultClock;

pub use router::{router, serve};

/// Service type shared with the handlers, repository chosen at runtime.
pub type SharedCommentService = CommentService<dyn CommentRepository, DefaultClock>;
