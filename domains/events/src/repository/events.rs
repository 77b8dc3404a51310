//! Event repository

use crate::domain::entities::{Event, EventCategory, EventType};
use campus_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find event by ID
    pub async fn get_by_id(&self, event_id: Uuid) -> Result<Option<Event>> {
        let row: Option<Event> = sqlx::query_as(
            r#"
            SELECT id, title, description, category, event_type, date, time,
                   registration_deadline, venue, banner, max_participants,
                   is_paid, price, rules, organizer_id, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// List events, optionally filtered by type and category, soonest first
    pub async fn list(
        &self,
        event_type: Option<EventType>,
        category: Option<EventCategory>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Event>> {
        let rows: Vec<Event> = sqlx::query_as(
            r#"
            SELECT id, title, description, category, event_type, date, time,
                   registration_deadline, venue, banner, max_participants,
                   is_paid, price, rules, organizer_id, created_at, updated_at
            FROM events
            WHERE ($1::event_type IS NULL OR event_type = $1)
              AND ($2::event_category IS NULL OR category = $2)
            ORDER BY date ASC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(event_type)
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a new event
    pub async fn create(&self, event: &Event) -> Result<Event> {
        let created: Event = sqlx::query_as(
            r#"
            INSERT INTO events (id, title, description, category, event_type, date, time,
                                registration_deadline, venue, banner, max_participants,
                                is_paid, price, rules, organizer_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING id, title, description, category, event_type, date, time,
                      registration_deadline, venue, banner, max_participants,
                      is_paid, price, rules, organizer_id, created_at, updated_at
            "#,
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.category)
        .bind(event.event_type)
        .bind(event.date)
        .bind(&event.time)
        .bind(event.registration_deadline)
        .bind(&event.venue)
        .bind(&event.banner)
        .bind(event.max_participants)
        .bind(event.is_paid)
        .bind(event.price)
        .bind(&event.rules)
        .bind(event.organizer_id)
        .bind(event.created_at)
        .bind(event.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
