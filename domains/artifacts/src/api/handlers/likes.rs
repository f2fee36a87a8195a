//! Like/unlike API handlers
//!
//! - PATCH /api/artifacts/{id}/like
//! - PATCH /api/artifacts/{id}/unlike

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use curio_common::{parse_document_id, Error, Result};
use serde_json::Value;

use crate::api::middleware::ArtifactsState;
use crate::domain::entities::{Identity, LikeSnapshot};
use crate::domain::likes::LikeManager;
use crate::domain::state::LikeEvent;

/// Request body carrying the liker's identity.
///
/// The body is read leniently. Anything without a string `email` field is
/// answered with the event's "email is required" message.
#[derive(Debug, Default)]
pub struct LikeRequest {
    pub email: Option<String>,
}

impl LikeRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let email = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| value.get("email")?.as_str().map(str::to_string));
        Self { email }
    }

    fn identity(&self, event: LikeEvent) -> Result<Identity> {
        self.email
            .as_deref()
            .and_then(Identity::parse)
            .ok_or_else(|| Error::Validation(event.missing_identity_message().to_string()))
    }
}

/// Like an artifact
pub async fn like_artifact(
    State(state): State<ArtifactsState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<LikeSnapshot>> {
    let id = parse_document_id(&id, "artifact")?;
    let req = LikeRequest::from_body(&body);
    let identity = req.identity(LikeEvent::Like)?;

    let snapshot = LikeManager::new(state.repos.artifacts.as_ref())
        .like(id, &identity)
        .await?;
    Ok(Json(snapshot))
}

/// Withdraw a like
pub async fn unlike_artifact(
    State(state): State<ArtifactsState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<LikeSnapshot>> {
    let id = parse_document_id(&id, "artifact")?;
    let req = LikeRequest::from_body(&body);
    let identity = req.identity(LikeEvent::Unlike)?;

    let snapshot = LikeManager::new(state.repos.artifacts.as_ref())
        .unlike(id, &identity)
        .await?;
    Ok(Json(snapshot))
}
