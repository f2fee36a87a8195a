//! In-memory event repository

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Event;
use crate::repository::EventStore;
use curio_common::Result;

#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<Vec<Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventRepository {
    async fn list(&self) -> Result<Vec<Event>> {
        let mut events = self.events.read().await.clone();
        // Stable, so events sharing a date keep insertion order
        events.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(events)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn create(&self, event: &Event) -> Result<Event> {
        self.events.write().await.push(event.clone());
        Ok(event.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| e.id != id);
        Ok(events.len() < before)
    }
}
