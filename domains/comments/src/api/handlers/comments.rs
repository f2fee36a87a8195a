//! Comment API handlers
//!
//! - GET /api/comments/{artifact_id} - Comments for an artifact, newest first
//! - POST /api/comments - Post a comment

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use curio_common::{parse_document_id, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::CommentsState;
use crate::domain::entities::{Comment, CommentDraft};

/// Request for posting a comment
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub artifact_id: String,

    #[validate(length(min = 1, message = "User email is required"))]
    pub user_email: String,

    pub user_name: Option<String>,

    #[validate(length(min = 1, message = "Comment text is required"))]
    pub text: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
}

impl CreateCommentRequest {
    fn into_draft(self) -> Result<CommentDraft> {
        Ok(CommentDraft {
            artifact_id: parse_document_id(&self.artifact_id, "artifact")?,
            user_email: self.user_email,
            user_name: self.user_name,
            text: self.text,
            rating: self.rating,
        })
    }
}

/// Comment response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub artifact_id: Uuid,
    pub user_email: String,
    pub user_name: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            artifact_id: c.artifact_id,
            user_email: c.user_email,
            user_name: c.user_name,
            text: c.text,
            rating: c.rating,
            created_at: c.created_at,
        }
    }
}

/// List comments for an artifact
pub async fn list_artifact_comments(
    State(state): State<CommentsState>,
    Path(artifact_id): Path<String>,
) -> Result<Json<Vec<CommentResponse>>> {
    let artifact_id = parse_document_id(&artifact_id, "artifact")?;

    let comments = state.repos.comments.list_by_artifact(artifact_id).await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

/// Post a comment on an artifact
pub async fn create_comment(
    State(state): State<CommentsState>,
    ValidatedJson(req): ValidatedJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>)> {
    let comment = Comment::new(req.into_draft()?)?;
    let created = state.repos.comments.create(&comment).await?;

    tracing::info!(
        comment_id = %created.id,
        artifact_id = %created.artifact_id,
        "Comment created"
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}
