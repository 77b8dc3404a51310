//! Event catalog API handlers
//!
//! Listing and details are public (students browse before logging in);
//! creation is restricted to organizers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use campus_common::{Error, Pagination, Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{Event, EventCategory, EventType};

use crate::api::middleware::{EventsState, OrganizerUser};

/// Query parameters for listing events
#[derive(Debug, Deserialize, Default)]
pub struct EventListQuery {
    /// Filter by participation type (SOLO, TEAM)
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    /// Filter by category (TECHNICAL, CULTURAL, SPORTS, WORKSHOP)
    pub category: Option<EventCategory>,
}

/// Request for creating a new event
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    pub category: EventCategory,

    #[serde(rename = "type")]
    pub event_type: EventType,

    pub date: DateTime<Utc>,

    /// Display time, e.g. "09:00 AM"
    #[validate(length(min = 1, max = 50))]
    pub time: String,

    pub registration_deadline: DateTime<Utc>,

    #[validate(length(min = 1, max = 200))]
    pub venue: String,

    pub banner: Option<String>,

    #[validate(range(min = 1))]
    pub max_participants: i32,

    #[serde(default)]
    pub is_paid: bool,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub price: i32,

    #[serde(default)]
    pub rules: Vec<String>,
}

/// Event response for API operations
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: DateTime<Utc>,
    pub time: String,
    pub registration_deadline: DateTime<Utc>,
    pub venue: String,
    pub banner: Option<String>,
    pub max_participants: i32,
    pub is_paid: bool,
    pub price: i32,
    pub rules: Vec<String>,
    pub organizer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            category: event.category,
            event_type: event.event_type,
            date: event.date,
            time: event.time,
            registration_deadline: event.registration_deadline,
            venue: event.venue,
            banner: event.banner,
            max_participants: event.max_participants,
            is_paid: event.is_paid,
            price: event.price,
            rules: event.rules.0,
            organizer_id: event.organizer_id,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// List events
///
/// **GET /api/events**
///
/// Public listing, filterable by type and category.
pub async fn list_events(
    State(state): State<EventsState>,
    Query(filter): Query<EventListQuery>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<EventResponse>>> {
    let events = state
        .repos
        .events
        .list(
            filter.event_type,
            filter.category,
            pagination.limit(),
            pagination.offset(),
        )
        .await
        .map_err(|e| Error::Internal(format!("Failed to list events: {}", e)))?;

    let responses: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(responses))
}

/// Get event details
///
/// **GET /api/events/{id}**
pub async fn get_event(
    State(state): State<EventsState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<EventResponse>> {
    let event = state
        .repos
        .events
        .get_by_id(event_id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to get event: {}", e)))?
        .ok_or_else(|| Error::NotFound("Event not found".to_string()))?;

    Ok(Json(EventResponse::from(event)))
}

/// Create a new event
///
/// **POST /api/events**
///
/// Only organizers and admins can create events; the caller becomes
/// the owning organizer.
pub async fn create_event(
    organizer: OrganizerUser,
    State(state): State<EventsState>,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventResponse>)> {
    let user = &organizer.0.user;

    let event = Event::new(
        request.title,
        request.description,
        request.category,
        request.event_type,
        request.date,
        request.time,
        request.registration_deadline,
        request.venue,
        request.banner,
        request.max_participants,
        request.is_paid,
        request.price,
        request.rules,
        user.id,
    )?;

    let created = state
        .repos
        .events
        .create(&event)
        .await
        .map_err(|e| Error::Internal(format!("Failed to create event: {}", e)))?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(created))))
}
