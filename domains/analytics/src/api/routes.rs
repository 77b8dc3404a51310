//! Route definitions for the Analytics domain API

use axum::{routing::get, Router};

use super::handlers::dashboard;
use super::middleware::AnalyticsState;

/// Create all Analytics domain API routes
pub fn routes() -> Router<AnalyticsState> {
    Router::new().route("/api/analytics/dashboard", get(dashboard::dashboard))
}
