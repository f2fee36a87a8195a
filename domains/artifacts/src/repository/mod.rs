//! Store abstraction and implementations for the Artifacts domain
//!
//! `ArtifactStore` is the seam to the document store. The Postgres
//! implementation is used in deployments; the in-memory one backs local
//! development and tests.

pub mod artifacts;
pub mod memory;

use std::sync::Arc;

use curio_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Artifact, ArtifactChanges, Identity, LikeSnapshot};
use crate::domain::state::LikeEvent;

pub use artifacts::ArtifactRepository;
pub use memory::InMemoryArtifactRepository;

/// Persistence operations for artifacts
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Find artifact by ID
    async fn find(&self, id: Uuid) -> Result<Option<Artifact>>;

    /// List all artifacts in insertion order
    async fn list(&self) -> Result<Vec<Artifact>>;

    /// List artifacts created by an identity
    async fn list_by_adder(&self, adder_email: &str) -> Result<Vec<Artifact>>;

    /// List artifacts liked by an identity, most liked first
    async fn list_liked_by(&self, identity: &Identity) -> Result<Vec<Artifact>>;

    /// Top artifacts by descending like count, ties in insertion order
    async fn list_featured(&self, limit: i64) -> Result<Vec<Artifact>>;

    /// One artifact drawn uniformly at random, `None` when empty
    async fn random(&self) -> Result<Option<Artifact>>;

    /// Insert a new artifact
    async fn create(&self, artifact: &Artifact) -> Result<Artifact>;

    /// Apply content changes; `false` when no artifact matched
    async fn update_content(&self, id: Uuid, changes: &ArtifactChanges) -> Result<bool>;

    /// Delete an artifact; `false` when no artifact matched
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Apply a like event as one atomic compound update.
    ///
    /// The membership guard, the count change and the set change commit
    /// together. Returns `None` when no artifact matched the id and guard.
    async fn apply_like_event(
        &self,
        id: Uuid,
        identity: &Identity,
        event: LikeEvent,
    ) -> Result<Option<LikeSnapshot>>;
}

/// Combined repository access for the Artifacts domain
#[derive(Clone)]
pub struct ArtifactsRepositories {
    pub artifacts: Arc<dyn ArtifactStore>,
}

impl ArtifactsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            artifacts: Arc::new(ArtifactRepository::new(pool)),
        }
    }

    /// Repositories backed by process memory
    pub fn in_memory() -> Self {
        Self {
            artifacts: Arc::new(InMemoryArtifactRepository::new()),
        }
    }
}
