//! Domain model for user-submitted comments.
//!
//! The comment domain models the validated value types (name, email,
//! comment text), the comment aggregate, and its lifecycle timestamps. All
//! infrastructure concerns are kept outside the domain boundary.

mod body;
mod comment;
mod email;
mod error;
mod ids;
mod name;

pub use body::CommentBody;
pub use comment::{Comment, PersistedCommentData};
pub use email::EmailAddress;
pub use error::CommentDomainError;
pub use ids::CommentId;
pub use name::CommenterName;
