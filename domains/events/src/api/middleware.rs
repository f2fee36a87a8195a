//! Events domain state

use crate::EventsRepositories;

/// Application state for the Events domain
#[derive(Clone)]
pub struct EventsState {
    pub repos: EventsRepositories,
}
