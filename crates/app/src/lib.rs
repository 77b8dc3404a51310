//! CampusEvents application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use campus_analytics::{AnalyticsState, StatsRepository};
use campus_auth::{AuthBackend, AuthConfig};
use campus_common::Config;
use campus_email::{EmailConfig, EmailServiceFactory};
use campus_events::{EventsRepositories, EventsState};
use campus_teams::{TeamsRepositories, TeamsState};
use sqlx::PgPool;
use std::sync::Arc;

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    // Auth backend shared by every domain
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        issuer: config.jwt_issuer.clone(),
        audience: config.jwt_audience.clone(),
    };
    let auth = AuthBackend::new(pool.clone(), auth_config);

    // Create email service from environment
    let email_config = EmailConfig::from_env()?;
    let email_service = EmailServiceFactory::create(email_config).await?;
    let email = Arc::from(email_service);

    // Per-domain states
    let events_state = EventsState {
        repos: EventsRepositories::new(pool.clone()),
        auth: auth.clone(),
        email,
    };

    let teams_state = TeamsState {
        repos: TeamsRepositories::new(pool.clone()),
        auth: auth.clone(),
        enforce_capacity: config.enforce_event_capacity,
    };

    let analytics_state = AnalyticsState {
        stats: StatsRepository::new(pool),
        auth,
    };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "CampusEvents API is running" }),
        )
        .merge(campus_events::routes().with_state(events_state))
        .merge(campus_teams::routes().with_state(teams_state))
        .merge(campus_analytics::routes().with_state(analytics_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
