//! Route definitions for Comments domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::comments;
use super::middleware::CommentsState;

/// Create all Comments domain API routes
pub fn routes() -> Router<CommentsState> {
    Router::new()
        .route("/api/comments", post(comments::create_comment))
        .route(
            "/api/comments/{artifact_id}",
            get(comments::list_artifact_comments),
        )
}
