//! Events domain state and auth backend integration

use crate::EventsRepositories;
use axum::extract::FromRef;
use campus_auth::AuthBackend;
use campus_email::EmailService;
use std::sync::Arc;

pub use campus_auth::{AuthUser, OrganizerUser};

/// Application state for the Events domain
#[derive(Clone)]
pub struct EventsState {
    pub repos: EventsRepositories,
    pub auth: AuthBackend,
    pub email: Arc<dyn EmailService>,
}

impl FromRef<EventsState> for AuthBackend {
    fn from_ref(state: &EventsState) -> Self {
        state.auth.clone()
    }
}
