//! Teams domain state and auth backend integration

use crate::TeamsRepositories;
use axum::extract::FromRef;
use campus_auth::AuthBackend;

pub use campus_auth::AuthUser;

/// Application state for the Teams domain
#[derive(Clone)]
pub struct TeamsState {
    pub repos: TeamsRepositories,
    pub auth: AuthBackend,
    /// Capacity enforcement on team joins. Off by default: the historical
    /// behavior admits members past maxParticipants, and that behavior is
    /// reproduced unless explicitly enabled.
    pub enforce_capacity: bool,
}

impl FromRef<TeamsState> for AuthBackend {
    fn from_ref(state: &TeamsState) -> Self {
        state.auth.clone()
    }
}
