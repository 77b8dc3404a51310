//! Solo registration API handler
//!
//! Team events register through the team registry; this handler covers
//! the direct sign-up path for SOLO events.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use campus_common::{Error, RepositoryError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{EventType, Registration};

use crate::api::middleware::{AuthUser, EventsState};

/// Response for registration operations
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub team_id: Option<Uuid>,
    pub has_attended: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Registration> for RegistrationResponse {
    fn from(r: Registration) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            event_id: r.event_id,
            team_id: r.team_id,
            has_attended: r.has_attended,
            created_at: r.created_at,
        }
    }
}

/// Register for a SOLO event
///
/// **POST /api/events/{id}/register**
///
/// The unique index on (user_id, event_id) rejects duplicate sign-ups
/// regardless of path (solo or via a team). A confirmation email is sent
/// best-effort; delivery failures do not fail the registration.
pub async fn register_solo(
    auth_context: AuthUser,
    State(state): State<EventsState>,
    Path(event_id): Path<Uuid>,
) -> Result<(StatusCode, Json<RegistrationResponse>)> {
    let user = &auth_context.0.user;

    let event = state
        .repos
        .events
        .get_by_id(event_id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to get event: {}", e)))?
        .ok_or_else(|| Error::NotFound("Event not found".to_string()))?;

    if event.event_type == EventType::Team {
        return Err(Error::InvalidState(
            "This is a team event; register by creating or joining a team".to_string(),
        ));
    }

    if !event.registration_open(Utc::now()) {
        return Err(Error::InvalidState(
            "Registration deadline has passed".to_string(),
        ));
    }

    let registration = Registration::solo(user.id, event_id);
    let created = state
        .repos
        .registrations
        .create(&registration)
        .await
        .map_err(|e| match e {
            RepositoryError::AlreadyExists => {
                Error::Conflict("Already registered for this event".to_string())
            }
            other => Error::Internal(format!("Failed to create registration: {}", other)),
        })?;

    let recipient_name = user.name.clone().unwrap_or_else(|| user.email.clone());
    let event_date = format!("{} {}", event.date.format("%Y-%m-%d"), event.time);
    if let Err(e) = state
        .email
        .send_registration_confirmation(
            &event.title,
            event.id,
            &event.venue,
            &event_date,
            &user.email,
            &recipient_name,
        )
        .await
    {
        tracing::warn!(error = %e, event_id = %event.id, "Failed to send registration confirmation");
    }

    Ok((StatusCode::CREATED, Json(RegistrationResponse::from(created))))
}
