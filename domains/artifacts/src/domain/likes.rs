//! Like-state manager
//!
//! Keeps `like_count == |liked_by|` for every artifact. Each like/unlike is a
//! single guarded compound write issued to the store; no application lock is
//! taken. When the store reports that the guarded write matched nothing, the
//! artifact is re-read to tell a missing artifact from a state conflict. If
//! the re-read shows the event is allowed after all, another writer got in
//! between and the write is retried once.

use curio_common::{Error, Result};
use uuid::Uuid;

use crate::domain::entities::{Identity, LikeSnapshot};
use crate::domain::state::{LikeEvent, LikeStateMachine};
use crate::repository::ArtifactStore;

/// Guarded writes attempted per event before giving up on a racing writer
const MAX_ATTEMPTS: usize = 2;

pub struct LikeManager<'a> {
    store: &'a dyn ArtifactStore,
}

impl<'a> LikeManager<'a> {
    pub fn new(store: &'a dyn ArtifactStore) -> Self {
        Self { store }
    }

    /// Record that `identity` likes the artifact
    pub async fn like(&self, artifact_id: Uuid, identity: &Identity) -> Result<LikeSnapshot> {
        self.apply(artifact_id, identity, LikeEvent::Like).await
    }

    /// Withdraw a like previously recorded for `identity`
    pub async fn unlike(&self, artifact_id: Uuid, identity: &Identity) -> Result<LikeSnapshot> {
        self.apply(artifact_id, identity, LikeEvent::Unlike).await
    }

    async fn apply(
        &self,
        artifact_id: Uuid,
        identity: &Identity,
        event: LikeEvent,
    ) -> Result<LikeSnapshot> {
        for attempt in 1..=MAX_ATTEMPTS {
            if let Some(snapshot) = self
                .store
                .apply_like_event(artifact_id, identity, event)
                .await?
            {
                tracing::info!(
                    artifact_id = %artifact_id,
                    identity = %identity,
                    event = %event,
                    like_count = snapshot.like_count,
                    "Artifact like state changed"
                );
                return Ok(snapshot);
            }

            let artifact = self
                .store
                .find(artifact_id)
                .await?
                .ok_or_else(|| Error::NotFound("Artifact not found".to_string()))?;

            if let Err(e) = LikeStateMachine::transition(artifact.like_state(identity), event) {
                tracing::debug!(artifact_id = %artifact_id, error = %e, "Like event rejected");
                return Err(Error::Conflict(event.conflict_message().to_string()));
            }

            // The guard failed yet the current state allows the event: another
            // writer changed the document in between.
            tracing::warn!(artifact_id = %artifact_id, attempt, "Like write lost a race");
        }

        Err(Error::Internal(
            "Failed to update artifact likes".to_string(),
        ))
    }
}
