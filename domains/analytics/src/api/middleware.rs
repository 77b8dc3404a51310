//! Analytics domain state and auth backend integration

use crate::StatsRepository;
use axum::extract::FromRef;
use campus_auth::AuthBackend;

pub use campus_auth::AuthUser;

/// Application state for the Analytics domain
#[derive(Clone)]
pub struct AnalyticsState {
    pub stats: StatsRepository,
    pub auth: AuthBackend,
}

impl FromRef<AnalyticsState> for AuthBackend {
    fn from_ref(state: &AnalyticsState) -> Self {
        state.auth.clone()
    }
}
