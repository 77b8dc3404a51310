//! Repository implementations for the Analytics domain

pub mod stats;

pub use stats::{EventStats, OrganizerStats, StatsRepository, StudentStats};
