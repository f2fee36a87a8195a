//! Route definitions for Events domain API

use axum::{routing::get, Router};

use super::handlers::events;
use super::middleware::EventsState;

/// Create all Events domain API routes
pub fn routes() -> Router<EventsState> {
    Router::new()
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/api/events/{id}",
            get(events::get_event).delete(events::delete_event),
        )
}
