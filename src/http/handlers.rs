//! HTTP handlers for the comment endpoints.
//!
//! Each handler is a linear pipeline: parse the path id, validate the
//! payload, call the service, and map the outcome to a status and
//! envelope. Storage causes reach the caller only as display strings in
//! `error.details`; the full error is logged here.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use super::SharedCommentService;
use crate::comment::domain::CommentId;
use crate::comment::ports::CommentRepositoryError;
use crate::comment::services::CommentServiceError;
use crate::http::envelope::{CommentResponse, failure, success};
use crate::http::validation::validate_comment_payload;

/// `GET /comments` — returns all comments.
///
/// An empty store is reported as 404 rather than an empty 200 array; this
/// asymmetry is part of the wire contract. Storage failure is 500, never an
/// empty success.
pub async fn list_comments(State(service): State<SharedCommentService>) -> Response {
    match service.list_all().await {
        Ok(comments) => {
            if comments.is_empty() {
                return failure(
                    StatusCode::NOT_FOUND,
                    "The comments file is empty or no comments have been added yet.",
                    None,
                );
            }
            let data: Vec<CommentResponse> = comments.iter().map(CommentResponse::from).collect();
            success(StatusCode::OK, "Comments fetched successfully.", Some(data))
        }
        Err(err) => {
            tracing::error!("failed to list comments: {err}");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error.",
                None,
            )
        }
    }
}

/// `GET /comments/:id` — returns a single comment.
///
/// An id that does not parse as a UUID cannot match any record and is
/// reported as not-found.
pub async fn get_comment_by_id(
    State(service): State<SharedCommentService>,
    Path(id): Path<String>,
) -> Response {
    let Some(comment_id) = CommentId::parse(&id) else {
        return failure(
            StatusCode::NOT_FOUND,
            "Comment not found with the given id.",
            None,
        );
    };

    match service.find_by_id(comment_id).await {
        Ok(Some(comment)) => success(
            StatusCode::OK,
            "Comment fetched successfully.",
            Some(CommentResponse::from(&comment)),
        ),
        Ok(None) => failure(
            StatusCode::NOT_FOUND,
            "Comment not found with the given id.",
            None,
        ),
        Err(err) => {
            tracing::error!("failed to fetch comment {comment_id}: {err}");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error while fetching the comment by ID",
                None,
            )
        }
    }
}

/// `POST /comments/add` — creates a comment from `{name, email, comment}`.
pub async fn add_comment(
    State(service): State<SharedCommentService>,
    Json(body): Json<Value>,
) -> Response {
    let input = match validate_comment_payload(&body) {
        Ok(input) => input,
        Err(err) => return failure(StatusCode::BAD_REQUEST, &err.message, err.details),
    };

    match service.create(input).await {
        Ok(comment) => success(
            StatusCode::CREATED,
            "Comment added successfully.",
            Some(CommentResponse::from(&comment)),
        ),
        Err(err) => service_failure(&err, "Could not add the comment."),
    }
}

/// `PUT /comments/edit/:id` — replaces the full content of a comment.
///
/// Edits always supply the complete `{name, email, comment}` replacement;
/// partial updates are not part of the contract.
pub async fn edit_comment(
    State(service): State<SharedCommentService>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let Some(comment_id) = CommentId::parse(&id) else {
        return not_found_response();
    };

    let input = match validate_comment_payload(&body) {
        Ok(input) => input,
        Err(err) => return failure(StatusCode::BAD_REQUEST, &err.message, err.details),
    };

    match service.update(comment_id, input).await {
        Ok(comment) => success(
            StatusCode::OK,
            "Comment updated successfully.",
            Some(CommentResponse::from(&comment)),
        ),
        Err(err) => service_failure(&err, "Could not update the comment."),
    }
}

/// `DELETE /comments/delete/:id` — removes a comment.
///
/// Re-deleting an already-deleted id reports not-found, not success.
pub async fn delete_comment(
    State(service): State<SharedCommentService>,
    Path(id): Path<String>,
) -> Response {
    let Some(comment_id) = CommentId::parse(&id) else {
        return not_found_response();
    };

    match service.delete(comment_id).await {
        Ok(()) => success(
            StatusCode::OK,
            "Comment deleted successfully.",
            None::<CommentResponse>,
        ),
        Err(err) => service_failure(&err, "Could not delete the comment."),
    }
}

/// Maps a service error to the failure envelope, using `internal_message`
/// for unexpected storage failures.
fn service_failure(err: &CommentServiceError, internal_message: &str) -> Response {
    match err {
        CommentServiceError::Domain(domain_err) => {
            let message = domain_err.to_string();
            failure(StatusCode::BAD_REQUEST, &message, None)
        }
        CommentServiceError::Repository(CommentRepositoryError::DuplicateEmail(_)) => failure(
            StatusCode::BAD_REQUEST,
            "Email already in use or not a valid email.",
            Some("Please use a unique and valid email address.".to_owned()),
        ),
        CommentServiceError::Repository(CommentRepositoryError::NotFound(_)) => {
            not_found_response()
        }
        CommentServiceError::Repository(repo_err) => {
            tracing::error!("storage failure: {repo_err}");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                internal_message,
                Some(repo_err.to_string()),
            )
        }
    }
}

fn not_found_response() -> Response {
    failure(
        StatusCode::NOT_FOUND,
        "Comment not found.",
        Some("No comment found with the given ID.".to_owned()),
    )
}
