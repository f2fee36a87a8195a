//! Events domain: exhibitions, talks and other dated happenings

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::{Event, EventDraft};

pub use repository::{EventRepository, EventStore, EventsRepositories, InMemoryEventRepository};

pub use api::routes;
pub use api::EventsState;
