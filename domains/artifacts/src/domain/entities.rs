//! Domain entities for the Artifacts domain
//!
//! An artifact is a catalogued museum object. Besides its descriptive content
//! it carries like state: `like_count` and the `liked_by` identity set, which
//! are only ever changed together.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;
use std::collections::BTreeSet;
use uuid::Uuid;

use curio_common::{Error, Result};

use crate::domain::state::{LikeEvent, LikeState, LikeStateMachine};
use curio_common::StateError;

/// Number of artifacts returned by the featured listing
pub const FEATURED_LIMIT: i64 = 6;

/// Artifact classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "artifact_type")]
pub enum ArtifactType {
    Tools,
    Weapons,
    Inscription,
    Pottery,
    #[serde(rename = "Recording Device")]
    #[sqlx(rename = "Recording Device")]
    RecordingDevice,
    Sculpture,
}

impl ArtifactType {
    pub const ALL: [ArtifactType; 6] = [
        ArtifactType::Tools,
        ArtifactType::Weapons,
        ArtifactType::Inscription,
        ArtifactType::Pottery,
        ArtifactType::RecordingDevice,
        ArtifactType::Sculpture,
    ];
}

impl std::fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactType::Tools => write!(f, "Tools"),
            ArtifactType::Weapons => write!(f, "Weapons"),
            ArtifactType::Inscription => write!(f, "Inscription"),
            ArtifactType::Pottery => write!(f, "Pottery"),
            ArtifactType::RecordingDevice => write!(f, "Recording Device"),
            ArtifactType::Sculpture => write!(f, "Sculpture"),
        }
    }
}

/// Caller-supplied identity (an email-like string), trimmed and non-empty.
///
/// No verification is performed beyond shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Parse a raw identity; `None` when blank after trimming
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of identities that liked an artifact.
///
/// Serialized as a JSON array. Insertion order is not meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikedBy(BTreeSet<String>);

impl LikedBy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a stored column; a missing value reads as the empty set
    pub fn from_stored(stored: Option<Vec<String>>) -> Self {
        Self(stored.unwrap_or_default().into_iter().collect())
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        self.0.contains(identity.as_str())
    }

    /// Returns `false` if the identity was already present
    pub fn insert(&mut self, identity: &Identity) -> bool {
        self.0.insert(identity.as_str().to_string())
    }

    /// Returns `false` if the identity was not present
    pub fn remove(&mut self, identity: &Identity) -> bool {
        self.0.remove(identity.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    /// Like state of one identity against this set
    pub fn state_of(&self, identity: &Identity) -> LikeState {
        if self.contains(identity) {
            LikeState::Liked
        } else {
            LikeState::NotLiked
        }
    }
}

/// Refreshed like state returned by like/unlike
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeSnapshot {
    pub like_count: i32,
    pub liked_by: LikedBy,
}

/// Content supplied when creating an artifact
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactDraft {
    pub name: String,
    pub image: String,
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

/// Content fields that may change after creation.
///
/// Like state and the creator identity are deliberately absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactChanges {
    pub name: Option<String>,
    pub image: Option<String>,
    pub artifact_type: Option<ArtifactType>,
    pub description: Option<String>,
    pub historical_context: Option<String>,
    pub created_at: Option<String>,
    pub discovered_at: Option<String>,
    pub discovered_by: Option<String>,
    pub present_location: Option<String>,
    pub location: Option<String>,
}

/// Artifact entity
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub artifact_type: ArtifactType,
    pub description: Option<String>,
    pub historical_context: Option<String>,
    pub created_at: Option<String>,
    pub discovered_at: Option<String>,
    pub discovered_by: Option<String>,
    pub present_location: Option<String>,
    pub location: Option<String>,
    pub adder_email: Option<String>,
    pub like_count: i32,
    pub liked_by: LikedBy,
}

impl Artifact {
    /// Create a new artifact with empty like state
    pub fn new(draft: ArtifactDraft) -> Result<Self> {
        let artifact = Self {
            id: Uuid::new_v4(),
            name: draft.name,
            image: draft.image,
            artifact_type: draft.artifact_type,
            description: draft.description,
            historical_context: draft.historical_context,
            created_at: draft.created_at,
            discovered_at: draft.discovered_at,
            discovered_by: draft.discovered_by,
            present_location: draft.present_location,
            location: draft.location,
            adder_email: draft.adder_email,
            like_count: 0,
            liked_by: LikedBy::new(),
        };
        artifact.validate()?;
        Ok(artifact)
    }

    /// Apply content changes; like state and creator are untouched
    pub fn apply_changes(&mut self, changes: &ArtifactChanges) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }
        fn set_opt<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                *target = value.clone();
            }
        }

        set(&mut self.name, &changes.name);
        set(&mut self.image, &changes.image);
        set(&mut self.artifact_type, &changes.artifact_type);
        set_opt(&mut self.description, &changes.description);
        set_opt(&mut self.historical_context, &changes.historical_context);
        set_opt(&mut self.created_at, &changes.created_at);
        set_opt(&mut self.discovered_at, &changes.discovered_at);
        set_opt(&mut self.discovered_by, &changes.discovered_by);
        set_opt(&mut self.present_location, &changes.present_location);
        set_opt(&mut self.location, &changes.location);
    }

    /// Current like state of one identity
    pub fn like_state(&self, identity: &Identity) -> LikeState {
        self.liked_by.state_of(identity)
    }

    /// Apply a like/unlike event to the count and the set together
    pub fn apply_like_event(
        &mut self,
        identity: &Identity,
        event: LikeEvent,
    ) -> std::result::Result<LikeSnapshot, StateError> {
        let next = LikeStateMachine::transition(self.like_state(identity), event)?;
        match next {
            LikeState::Liked => {
                self.liked_by.insert(identity);
                self.like_count += 1;
            }
            LikeState::NotLiked => {
                self.liked_by.remove(identity);
                self.like_count -= 1;
            }
        }
        Ok(self.like_snapshot())
    }

    pub fn like_snapshot(&self) -> LikeSnapshot {
        LikeSnapshot {
            like_count: self.like_count,
            liked_by: self.liked_by.clone(),
        }
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("Name is required".to_string()));
        }

        if self.image.trim().is_empty() {
            return Err(Error::Validation("Image URL is required".to_string()));
        }

        if self.like_count < 0 || self.like_count as usize != self.liked_by.len() {
            return Err(Error::Validation(format!(
                "Like count {} does not match {} recorded likes",
                self.like_count,
                self.liked_by.len()
            )));
        }

        Ok(())
    }
}

impl<'r> sqlx::FromRow<'r, PgRow> for Artifact {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            image: row.try_get("image")?,
            artifact_type: row.try_get("artifact_type")?,
            description: row.try_get("description")?,
            historical_context: row.try_get("historical_context")?,
            created_at: row.try_get("created_at")?,
            discovered_at: row.try_get("discovered_at")?,
            discovered_by: row.try_get("discovered_by")?,
            present_location: row.try_get("present_location")?,
            location: row.try_get("location")?,
            adder_email: row.try_get("adder_email")?,
            like_count: row.try_get("like_count")?,
            liked_by: LikedBy::from_stored(row.try_get("liked_by")?),
        })
    }
}
