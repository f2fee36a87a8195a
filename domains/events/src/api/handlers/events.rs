//! Event API handlers
//!
//! - GET /api/events - List events by date
//! - GET /api/events/{id} - Get one event
//! - POST /api/events - Announce an event
//! - DELETE /api/events/{id} - Remove an event

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use curio_common::{parse_document_id, Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::EventsState;
use crate::domain::entities::{Event, EventDraft};

/// Request for creating an event
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    pub description: Option<String>,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,
}

impl From<CreateEventRequest> for EventDraft {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            title: req.title,
            date: req.date,
            location: req.location,
            description: req.description,
            image: req.image,
        }
    }
}

/// Event response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub date: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            title: e.title,
            date: e.date,
            location: e.location,
            description: e.description,
            image: e.image,
            created_at: e.created_at,
        }
    }
}

/// Plain acknowledgement response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// List all events
pub async fn list_events(State(state): State<EventsState>) -> Result<Json<Vec<EventResponse>>> {
    let events = state.repos.events.list().await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

/// Get a single event by ID
pub async fn get_event(
    State(state): State<EventsState>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>> {
    let id = parse_document_id(&id, "event")?;

    let event = state
        .repos
        .events
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Event not found".to_string()))?;

    Ok(Json(event.into()))
}

/// Create an event
pub async fn create_event(
    State(state): State<EventsState>,
    ValidatedJson(req): ValidatedJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventResponse>)> {
    let event = Event::new(req.into())?;
    let created = state.repos.events.create(&event).await?;

    tracing::info!(event_id = %created.id, date = %created.date, "Event created");

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Delete an event
pub async fn delete_event(
    State(state): State<EventsState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_document_id(&id, "event")?;

    if !state.repos.events.delete(id).await? {
        return Err(Error::NotFound("Event not found".to_string()));
    }

    tracing::info!(event_id = %id, "Event deleted");
    Ok(Json(MessageResponse {
        message: "Event deleted",
    }))
}
