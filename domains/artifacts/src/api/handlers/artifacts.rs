//! Artifact catalog API handlers
//!
//! - GET /api/artifacts - List artifacts (by creator, or featured)
//! - GET /api/artifacts/random - One random artifact
//! - GET /api/artifacts/liked - Artifacts liked by an identity
//! - GET /api/artifacts/{id} - Get one artifact
//! - POST /api/artifacts - Create an artifact
//! - PUT /api/artifacts/{id} - Update content fields
//! - DELETE /api/artifacts/{id} - Delete an artifact

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use curio_common::{parse_document_id, Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::ArtifactsState;
use crate::domain::entities::{
    Artifact, ArtifactChanges, ArtifactDraft, ArtifactType, Identity, LikedBy, FEATURED_LIMIT,
};

/// Query parameters for listing artifacts
#[derive(Debug, Deserialize)]
pub struct ListArtifactsQuery {
    /// Only artifacts added by this identity
    pub email: Option<String>,
    /// `true` returns the most liked artifacts
    pub featured: Option<String>,
}

/// Query parameters for listing liked artifacts
#[derive(Debug, Deserialize)]
pub struct LikedArtifactsQuery {
    pub email: Option<String>,
}

/// Request for creating an artifact.
///
/// `likeCount` and `likedBy` are not part of the schema; any values a client
/// sends for them are dropped during deserialization.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtifactRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image: String,

    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,

    pub description: Option<String>,
    pub historical_context: Option<String>,
    pub created_at: Option<String>,
    pub discovered_at: Option<String>,
    pub discovered_by: Option<String>,
    pub present_location: Option<String>,
    pub location: Option<String>,
    pub adder_email: Option<String>,
}

impl From<CreateArtifactRequest> for ArtifactDraft {
    fn from(req: CreateArtifactRequest) -> Self {
        Self {
            name: req.name,
            image: req.image,
            artifact_type: req.artifact_type,
            description: req.description,
            historical_context: req.historical_context,
            created_at: req.created_at,
            discovered_at: req.discovered_at,
            discovered_by: req.discovered_by,
            present_location: req.present_location,
            location: req.location,
            adder_email: req
                .adder_email
                .and_then(|email| Identity::parse(&email))
                .map(|identity| identity.as_str().to_string()),
        }
    }
}

/// Request for updating an artifact's content fields.
///
/// `_id`, `likeCount`, `likedBy` and `adderEmail` are immutable through this
/// route and are ignored if present.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtifactRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,

    #[serde(rename = "type")]
    pub artifact_type: Option<ArtifactType>,

    pub description: Option<String>,
    pub historical_context: Option<String>,
    pub created_at: Option<String>,
    pub discovered_at: Option<String>,
    pub discovered_by: Option<String>,
    pub present_location: Option<String>,
    pub location: Option<String>,
}

impl From<UpdateArtifactRequest> for ArtifactChanges {
    fn from(req: UpdateArtifactRequest) -> Self {
        Self {
            name: req.name,
            image: req.image,
            artifact_type: req.artifact_type,
            description: req.description,
            historical_context: req.historical_context,
            created_at: req.created_at,
            discovered_at: req.discovered_at,
            discovered_by: req.discovered_by,
            present_location: req.present_location,
            location: req.location,
        }
    }
}

/// Artifact response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub image: String,
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovered_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovered_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adder_email: Option<String>,
    pub like_count: i32,
    pub liked_by: LikedBy,
}

impl From<Artifact> for ArtifactResponse {
    fn from(a: Artifact) -> Self {
        Self {
            id: a.id,
            name: a.name,
            image: a.image,
            artifact_type: a.artifact_type,
            description: a.description,
            historical_context: a.historical_context,
            created_at: a.created_at,
            discovered_at: a.discovered_at,
            discovered_by: a.discovered_by,
            present_location: a.present_location,
            location: a.location,
            adder_email: a.adder_email,
            like_count: a.like_count,
            liked_by: a.liked_by,
        }
    }
}

/// Response for a created artifact
#[derive(Debug, Serialize)]
pub struct ArtifactCreatedResponse {
    pub message: &'static str,
    pub id: Uuid,
}

/// Plain acknowledgement response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn into_responses(artifacts: Vec<Artifact>) -> Json<Vec<ArtifactResponse>> {
    Json(artifacts.into_iter().map(Into::into).collect())
}

/// List artifacts, optionally by creator or the featured top list
pub async fn list_artifacts(
    State(state): State<ArtifactsState>,
    Query(query): Query<ListArtifactsQuery>,
) -> Result<Json<Vec<ArtifactResponse>>> {
    let store = &state.repos.artifacts;

    if query.featured.as_deref() == Some("true") {
        let featured = store.list_featured(FEATURED_LIMIT).await?;
        return Ok(into_responses(featured));
    }

    let artifacts = match query.email.as_deref().and_then(Identity::parse) {
        Some(adder) => store.list_by_adder(adder.as_str()).await?,
        None => store.list().await?,
    };

    Ok(into_responses(artifacts))
}

/// Get one uniformly random artifact
pub async fn get_random_artifact(
    State(state): State<ArtifactsState>,
) -> Result<Json<ArtifactResponse>> {
    let artifact = state
        .repos
        .artifacts
        .random()
        .await?
        .ok_or_else(|| Error::NotFound("No artifacts found".to_string()))?;

    Ok(Json(artifact.into()))
}

/// List artifacts liked by an identity, most liked first
pub async fn list_liked_artifacts(
    State(state): State<ArtifactsState>,
    Query(query): Query<LikedArtifactsQuery>,
) -> Result<Json<Vec<ArtifactResponse>>> {
    let identity = query
        .email
        .as_deref()
        .and_then(Identity::parse)
        .ok_or_else(|| Error::Validation("Missing or invalid user email".to_string()))?;

    let artifacts = state.repos.artifacts.list_liked_by(&identity).await?;
    Ok(into_responses(artifacts))
}

/// Get a single artifact by ID
pub async fn get_artifact(
    State(state): State<ArtifactsState>,
    Path(id): Path<String>,
) -> Result<Json<ArtifactResponse>> {
    let id = parse_document_id(&id, "artifact")?;

    let artifact = state
        .repos
        .artifacts
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Artifact not found".to_string()))?;

    Ok(Json(artifact.into()))
}

/// Create an artifact with empty like state
pub async fn create_artifact(
    State(state): State<ArtifactsState>,
    ValidatedJson(req): ValidatedJson<CreateArtifactRequest>,
) -> Result<(StatusCode, Json<ArtifactCreatedResponse>)> {
    let artifact = Artifact::new(req.into())?;
    let created = state.repos.artifacts.create(&artifact).await?;

    tracing::info!(
        artifact_id = %created.id,
        artifact_type = %created.artifact_type,
        "Artifact created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ArtifactCreatedResponse {
            message: "Artifact created",
            id: created.id,
        }),
    ))
}

/// Update an artifact's content fields
pub async fn update_artifact(
    State(state): State<ArtifactsState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateArtifactRequest>,
) -> Result<Json<MessageResponse>> {
    let id = parse_document_id(&id, "artifact")?;
    let changes: ArtifactChanges = req.into();

    if !state.repos.artifacts.update_content(id, &changes).await? {
        return Err(Error::NotFound("Artifact not found".to_string()));
    }

    tracing::info!(artifact_id = %id, "Artifact updated");
    Ok(Json(MessageResponse {
        message: "Artifact updated",
    }))
}

/// Delete an artifact
pub async fn delete_artifact(
    State(state): State<ArtifactsState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_document_id(&id, "artifact")?;

    if !state.repos.artifacts.delete(id).await? {
        return Err(Error::NotFound("Artifact not found".to_string()));
    }

    tracing::info!(artifact_id = %id, "Artifact deleted");
    Ok(Json(MessageResponse {
        message: "Artifact deleted",
    }))
}
