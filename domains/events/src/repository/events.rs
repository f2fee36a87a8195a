//! Postgres event repository

use crate::domain::entities::Event;
use crate::repository::EventStore;
use curio_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

const EVENT_COLUMNS: &str = "id, title, date, location, description, image, created_at";

#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl EventStore for EventRepository {
    async fn list(&self) -> Result<Vec<Event>> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY date COLLATE \"C\" ASC, created_at ASC");
        let events = sqlx::query_as::<_, Event>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(events)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Event>> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    async fn create(&self, event: &Event) -> Result<Event> {
        let query = format!(
            "INSERT INTO events ({EVENT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {EVENT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Event>(&query)
            .bind(event.id)
            .bind(&event.title)
            .bind(&event.date)
            .bind(&event.location)
            .bind(&event.description)
            .bind(&event.image)
            .bind(event.created_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
