//! Feedback API handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use campus_common::{Error, RepositoryError, Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::Feedback;

use crate::api::middleware::{AuthUser, EventsState};

/// Request for submitting event feedback
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitFeedbackRequest {
    /// Star rating, 1-5
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    #[validate(length(max = 2000))]
    pub comment: Option<String>,

    #[validate(length(max = 2000))]
    pub improvements: Option<String>,
}

/// Response for feedback operations
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub id: Uuid,
    pub event_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub improvements: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id,
            event_id: feedback.event_id,
            rating: feedback.rating,
            comment: feedback.comment,
            improvements: feedback.improvements,
            created_at: feedback.created_at,
        }
    }
}

/// Submit feedback for an event
///
/// **POST /api/feedback/{event_id}**
///
/// One feedback entry per user per event.
pub async fn submit_feedback(
    auth_context: AuthUser,
    State(state): State<EventsState>,
    Path(event_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<SubmitFeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackResponse>)> {
    let user = &auth_context.0.user;

    // Verify the event exists before accepting feedback for it
    state
        .repos
        .events
        .get_by_id(event_id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to get event: {}", e)))?
        .ok_or_else(|| Error::NotFound("Event not found".to_string()))?;

    let feedback = Feedback::new(
        user.id,
        event_id,
        request.rating,
        request.comment,
        request.improvements,
    )?;

    let created = state
        .repos
        .feedback
        .create(&feedback)
        .await
        .map_err(|e| match e {
            RepositoryError::AlreadyExists => {
                Error::Conflict("Feedback already submitted for this event".to_string())
            }
            other => Error::Internal(format!("Failed to save feedback: {}", other)),
        })?;

    Ok((StatusCode::CREATED, Json(FeedbackResponse::from(created))))
}
