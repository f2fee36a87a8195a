//! Artifact domain model: entities, like state machine, like-state manager

pub mod entities;
pub mod likes;
pub mod state;
