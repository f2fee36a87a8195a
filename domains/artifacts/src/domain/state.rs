//! State machine for one identity's like status on one artifact
//!
//! Like states: NotLiked → Liked (like); Liked → NotLiked (unlike).
//! There is no pending state: every transition completes atomically or fails.

use serde::{Deserialize, Serialize};

pub use curio_common::StateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeState {
    NotLiked,
    Liked,
}

impl LikeState {
    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [LikeState] {
        match self {
            Self::NotLiked => &[Self::Liked],
            Self::Liked => &[Self::NotLiked],
        }
    }
}

impl std::fmt::Display for LikeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotLiked => write!(f, "not_liked"),
            Self::Liked => write!(f, "liked"),
        }
    }
}

/// Events that trigger like state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeEvent {
    Like,
    Unlike,
}

impl LikeEvent {
    /// Message reported when the event is rejected by the current state
    pub fn conflict_message(&self) -> &'static str {
        match self {
            Self::Like => "User already liked this artifact",
            Self::Unlike => "User has not liked this artifact",
        }
    }

    /// Message reported when the request carries no usable identity
    pub fn missing_identity_message(&self) -> &'static str {
        match self {
            Self::Like => "User email is required to like artifact",
            Self::Unlike => "User email is required to unlike artifact",
        }
    }
}

impl std::fmt::Display for LikeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Like => write!(f, "like"),
            Self::Unlike => write!(f, "unlike"),
        }
    }
}

/// Like state machine
pub struct LikeStateMachine;

impl LikeStateMachine {
    /// Attempt a state transition
    pub fn transition(current: LikeState, event: LikeEvent) -> Result<LikeState, StateError> {
        match (current, event) {
            (LikeState::NotLiked, LikeEvent::Like) => Ok(LikeState::Liked),
            (LikeState::Liked, LikeEvent::Unlike) => Ok(LikeState::NotLiked),
            _ => Err(StateError::InvalidTransition {
                from: current.to_string(),
                event: event.to_string(),
            }),
        }
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: LikeState, event: &LikeEvent) -> bool {
        Self::transition(current, *event).is_ok()
    }
}
