//! Artifacts domain state

use crate::ArtifactsRepositories;

/// Application state for the Artifacts domain
#[derive(Clone)]
pub struct ArtifactsState {
    pub repos: ArtifactsRepositories,
}
