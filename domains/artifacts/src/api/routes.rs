//! Route definitions for Artifacts domain API

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{artifacts, likes};
use super::middleware::ArtifactsState;

/// Create artifact CRUD routes
fn artifact_routes() -> Router<ArtifactsState> {
    Router::new()
        .route(
            "/api/artifacts",
            get(artifacts::list_artifacts).post(artifacts::create_artifact),
        )
        .route("/api/artifacts/random", get(artifacts::get_random_artifact))
        .route("/api/artifacts/liked", get(artifacts::list_liked_artifacts))
        .route(
            "/api/artifacts/{id}",
            get(artifacts::get_artifact)
                .put(artifacts::update_artifact)
                .delete(artifacts::delete_artifact),
        )
}

/// Create like/unlike routes
fn like_routes() -> Router<ArtifactsState> {
    Router::new()
        .route("/api/artifacts/{id}/like", patch(likes::like_artifact))
        .route("/api/artifacts/{id}/unlike", patch(likes::unlike_artifact))
}

/// Create all Artifacts domain API routes
pub fn routes() -> Router<ArtifactsState> {
    Router::new().merge(artifact_routes()).merge(like_routes())
}
