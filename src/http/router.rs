//! Route wiring for the comment API.

use axum::Router;
use axum::routing::{delete, get, post, put};

use super::SharedCommentService;
use super::handlers;

/// Builds the axum `Router` for the comment API.
///
/// Routes:
///
/// - `GET    /comments`            — list all comments
/// - `GET    /comments/:id`        — get one comment
/// - `POST   /comments/add`        — create a comment
/// - `PUT    /comments/edit/:id`   — replace a comment's content
/// - `DELETE /comments/delete/:id` — delete a comment
#[must_use]
pub fn router(service: SharedCommentService) -> Router {
    Router::new()
        .route("/comments", get(handlers::list_comments))
        .route("/comments/:id", get(handlers::get_comment_by_id))
        .route("/comments/add", post(handlers::add_comment))
        .route("/comments/edit/:id", put(handlers::edit_comment))
        .route("/comments/delete/:id", delete(handlers::delete_comment))
        .with_state(service)
}

/// Serves the comment API at the given address (e.g. `"0.0.0.0:3000"`).
///
/// # Errors
///
/// Returns an [`std::io::Error`] when the listener cannot bind or the
/// server fails.
pub async fn serve(service: SharedCommentService, addr: &str) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
