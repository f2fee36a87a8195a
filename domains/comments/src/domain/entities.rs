//! Domain entities for the Comments domain
//!
//! Comments reference an artifact by id only; they are immutable once
//! created and are not removed when the artifact is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use curio_common::{Error, Result};

/// Display name used when the commenter gives none
pub const ANONYMOUS_USER_NAME: &str = "Anonymous";

/// Lowest and highest accepted rating
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Content supplied when posting a comment
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDraft {
    pub artifact_id: Uuid,
    pub user_email: String,
    pub user_name: Option<String>,
    pub text: String,
    pub rating: Option<i32>,
}

/// Comment entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub artifact_id: Uuid,
    pub user_email: String,
    pub user_name: String,
    pub text: String,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment stamped with the current time
    pub fn new(draft: CommentDraft) -> Result<Self> {
        let user_name = draft
            .user_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| ANONYMOUS_USER_NAME.to_string());

        let comment = Self {
            id: Uuid::new_v4(),
            artifact_id: draft.artifact_id,
            user_email: draft.user_email.trim().to_string(),
            user_name,
            text: draft.text,
            rating: draft.rating,
            created_at: Utc::now(),
        };
        comment.validate()?;
        Ok(comment)
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<()> {
        if self.user_email.is_empty() {
            return Err(Error::Validation("User email is required".to_string()));
        }

        if self.text.trim().is_empty() {
            return Err(Error::Validation("Comment text is required".to_string()));
        }

        if let Some(rating) = self.rating {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(Error::Validation(format!(
                    "Rating must be between {} and {}",
                    MIN_RATING, MAX_RATING
                )));
            }
        }

        Ok(())
    }
}
