//! Dashboard statistics repository
//!
//! Cross-domain read models over the events, registrations, and feedback
//! tables, queried at runtime like the auth backend's identity reads.

use campus_common::Result;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Per-event registration and feedback counts
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EventStats {
    #[serde(skip_serializing)]
    pub id: Uuid,
    pub title: String,
    pub registrations: i64,
    pub feedbacks: i64,
    #[serde(skip_serializing)]
    pub avg_rating: Option<f64>,
}

/// Dashboard stats for organizers and admins
#[derive(Debug, Clone, Serialize)]
pub struct OrganizerStats {
    pub total_events: i64,
    pub total_registrations: i64,
    /// Mean of per-event average ratings, one decimal; events without
    /// feedback contribute zero
    pub avg_rating: f64,
    pub events: Vec<EventStats>,
}

/// Dashboard stats for students
#[derive(Debug, Clone, Serialize)]
pub struct StudentStats {
    pub registrations: i64,
    pub attended: i64,
}

#[derive(Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Aggregate stats over an organizer's events, or over all events
    /// when no organizer is given (admin view)
    pub async fn organizer_stats(&self, organizer_id: Option<Uuid>) -> Result<OrganizerStats> {
        let events: Vec<EventStats> = sqlx::query_as(
            r#"
            SELECT e.id, e.title,
                   (SELECT COUNT(*) FROM registrations r WHERE r.event_id = e.id) AS registrations,
                   (SELECT COUNT(*) FROM feedback f WHERE f.event_id = e.id) AS feedbacks,
                   (SELECT AVG(f.rating)::float8 FROM feedback f WHERE f.event_id = e.id) AS avg_rating
            FROM events e
            WHERE ($1::uuid IS NULL OR e.organizer_id = $1)
            ORDER BY e.date ASC
            "#,
        )
        .bind(organizer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(summarize(events))
    }

    /// Registration and attendance counts for a student
    pub async fn student_stats(&self, user_id: Uuid) -> Result<StudentStats> {
        let row: (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*),
                   COUNT(*) FILTER (WHERE has_attended)
            FROM registrations
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(StudentStats {
            registrations: row.0,
            attended: row.1,
        })
    }
}

/// Fold per-event rows into the organizer dashboard summary.
///
/// The overall rating is the mean of per-event averages (not of raw
/// ratings); events without feedback count as zero.
fn summarize(events: Vec<EventStats>) -> OrganizerStats {
    let total_events = events.len() as i64;
    let total_registrations = events.iter().map(|e| e.registrations).sum();

    let rating_sum: f64 = events.iter().map(|e| e.avg_rating.unwrap_or(0.0)).sum();
    let avg_rating = rating_sum / (total_events.max(1) as f64);
    let avg_rating = (avg_rating * 10.0).round() / 10.0;

    OrganizerStats {
        total_events,
        total_registrations,
        avg_rating,
        events,
    }
}
