//! Comments domain state

use crate::CommentsRepositories;

/// Application state for the Comments domain
#[derive(Clone)]
pub struct CommentsState {
    pub repos: CommentsRepositories,
}
