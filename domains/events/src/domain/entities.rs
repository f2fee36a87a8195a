//! Domain entities for the Events domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use curio_common::{Error, Result};

/// Content supplied when announcing an event
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub location: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Event entity.
///
/// `date` is kept exactly as supplied; listings order it as text, which is
/// chronological for ISO-8601 dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub date: String,
    pub location: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(draft: EventDraft) -> Result<Self> {
        let event = Self {
            id: Uuid::new_v4(),
            title: draft.title,
            date: draft.date,
            location: draft.location,
            description: draft.description,
            image: draft.image,
            created_at: Utc::now(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("Title", &self.title),
            ("Date", &self.date),
            ("Location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!("{} is required", field)));
            }
        }
        Ok(())
    }
}
