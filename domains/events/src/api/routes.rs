//! Route definitions for the Events domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{events, feedback, registrations};
use super::middleware::EventsState;

/// Create event catalog routes
fn event_routes() -> Router<EventsState> {
    Router::new()
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route("/api/events/{id}", get(events::get_event))
}

/// Create registration routes
fn registration_routes() -> Router<EventsState> {
    Router::new().route(
        "/api/events/{id}/register",
        post(registrations::register_solo),
    )
}

/// Create feedback routes
fn feedback_routes() -> Router<EventsState> {
    Router::new().route(
        "/api/feedback/{event_id}",
        post(feedback::submit_feedback),
    )
}

/// Create all Events domain API routes
pub fn routes() -> Router<EventsState> {
    Router::new()
        .merge(event_routes())
        .merge(registration_routes())
        .merge(feedback_routes())
}
