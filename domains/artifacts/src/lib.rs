//! Artifacts domain: catalogued museum objects and their like state

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    Artifact, ArtifactChanges, ArtifactDraft, ArtifactType, Identity, LikeSnapshot, LikedBy,
    FEATURED_LIMIT,
};
pub use domain::likes::LikeManager;
pub use domain::state::{LikeEvent, LikeState, LikeStateMachine, StateError};

// Re-export repository types
pub use repository::{
    ArtifactRepository, ArtifactStore, ArtifactsRepositories, InMemoryArtifactRepository,
};

// Re-export API types
pub use api::routes;
pub use api::ArtifactsState;
