//! Analytics domain: dashboard statistics
//!
//! Read-only aggregation over tables owned by the events and teams
//! domains. No entity here is written; everything is a read model.

pub mod api;
pub mod repository;

pub use repository::{EventStats, OrganizerStats, StatsRepository, StudentStats};

pub use api::routes;
pub use api::AnalyticsState;
