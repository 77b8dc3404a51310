//! API layer for the Analytics domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::AnalyticsState;
pub use routes::routes;
