//! Store abstraction and implementations for the Events domain

pub mod events;
pub mod memory;

use std::sync::Arc;

use curio_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Event;

pub use events::EventRepository;
pub use memory::InMemoryEventRepository;

/// Persistence operations for events
#[async_trait::async_trait]
pub trait EventStore: Send + Sync {
    /// List all events, earliest date first
    async fn list(&self) -> Result<Vec<Event>>;

    async fn find(&self, id: Uuid) -> Result<Option<Event>>;

    async fn create(&self, event: &Event) -> Result<Event>;

    /// Delete an event; `false` when nothing matched
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Combined repository access for the Events domain
#[derive(Clone)]
pub struct EventsRepositories {
    pub events: Arc<dyn EventStore>,
}

impl EventsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            events: Arc::new(EventRepository::new(pool)),
        }
    }

    /// Repositories backed by process memory
    pub fn in_memory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepository::new()),
        }
    }
}
