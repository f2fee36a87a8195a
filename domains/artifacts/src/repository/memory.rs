//! In-memory artifact repository
//!
//! Keeps artifacts in insertion order behind a single `RwLock`. Every like
//! event is applied under the write lock, so the count and the set change
//! together exactly as the Postgres conditional update does.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Artifact, ArtifactChanges, Identity, LikeSnapshot};
use crate::domain::state::LikeEvent;
use crate::repository::ArtifactStore;
use curio_common::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifactRepository {
    artifacts: Arc<RwLock<Vec<Artifact>>>,
}

impl InMemoryArtifactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Sort most liked first; the sort is stable so ties keep insertion order.
fn sort_by_likes_desc(artifacts: &mut [Artifact]) {
    artifacts.sort_by(|a, b| b.like_count.cmp(&a.like_count));
}

/// Uniform index in `0..len`
fn random_index(len: usize) -> Result<usize> {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf)
        .map_err(|e| Error::Internal(format!("Random source unavailable: {}", e)))?;
    Ok((u64::from_le_bytes(buf) % len as u64) as usize)
}

#[async_trait::async_trait]
impl ArtifactStore for InMemoryArtifactRepository {
    async fn find(&self, id: Uuid) -> Result<Option<Artifact>> {
        let artifacts = self.artifacts.read().await;
        Ok(artifacts.iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Artifact>> {
        Ok(self.artifacts.read().await.clone())
    }

    async fn list_by_adder(&self, adder_email: &str) -> Result<Vec<Artifact>> {
        let artifacts = self.artifacts.read().await;
        Ok(artifacts
            .iter()
            .filter(|a| a.adder_email.as_deref() == Some(adder_email))
            .cloned()
            .collect())
    }

    async fn list_liked_by(&self, identity: &Identity) -> Result<Vec<Artifact>> {
        let mut liked: Vec<Artifact> = self
            .artifacts
            .read()
            .await
            .iter()
            .filter(|a| a.liked_by.contains(identity))
            .cloned()
            .collect();
        sort_by_likes_desc(&mut liked);
        Ok(liked)
    }

    async fn list_featured(&self, limit: i64) -> Result<Vec<Artifact>> {
        let mut all = self.artifacts.read().await.clone();
        sort_by_likes_desc(&mut all);
        all.truncate(limit.max(0) as usize);
        Ok(all)
    }

    async fn random(&self) -> Result<Option<Artifact>> {
        let artifacts = self.artifacts.read().await;
        if artifacts.is_empty() {
            return Ok(None);
        }
        let index = random_index(artifacts.len())?;
        Ok(artifacts.get(index).cloned())
    }

    async fn create(&self, artifact: &Artifact) -> Result<Artifact> {
        let mut artifacts = self.artifacts.write().await;
        if artifacts.iter().any(|a| a.id == artifact.id) {
            return Err(Error::Internal(format!(
                "Artifact {} already exists",
                artifact.id
            )));
        }
        artifacts.push(artifact.clone());
        Ok(artifact.clone())
    }

    async fn update_content(&self, id: Uuid, changes: &ArtifactChanges) -> Result<bool> {
        let mut artifacts = self.artifacts.write().await;
        match artifacts.iter_mut().find(|a| a.id == id) {
            Some(artifact) => {
                artifact.apply_changes(changes);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut artifacts = self.artifacts.write().await;
        let before = artifacts.len();
        artifacts.retain(|a| a.id != id);
        Ok(artifacts.len() < before)
    }

    async fn apply_like_event(
        &self,
        id: Uuid,
        identity: &Identity,
        event: LikeEvent,
    ) -> Result<Option<LikeSnapshot>> {
        let mut artifacts = self.artifacts.write().await;
        let Some(artifact) = artifacts.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        Ok(artifact.apply_like_event(identity, event).ok())
    }
}
