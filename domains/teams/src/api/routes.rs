//! Route definitions for the Teams domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{account, teams};
use super::middleware::TeamsState;

/// Create team registry routes
fn team_routes() -> Router<TeamsState> {
    Router::new()
        .route("/api/teams", post(teams::create_team))
        .route("/api/teams/join", post(teams::join_team))
        .route("/api/teams/my-teams", get(teams::my_teams))
}

/// Create account/auth introspection routes
fn account_routes() -> Router<TeamsState> {
    Router::new()
        .route("/api/auth/me", get(account::me))
        .route("/api/auth/logout", post(account::logout))
}

/// Create all Teams domain API routes
pub fn routes() -> Router<TeamsState> {
    Router::new().merge(team_routes()).merge(account_routes())
}
