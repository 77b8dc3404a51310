//! Team repository

use crate::domain::entities::{EventSummary, Team};
use campus_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find team by ID
    pub async fn get_by_id(&self, team_id: Uuid) -> Result<Option<Team>> {
        let row: Option<Team> = sqlx::query_as(
            r#"
            SELECT id, name, code, event_id, created_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Find team by join code (codes are globally unique by construction)
    pub async fn get_by_code(&self, code: &str) -> Result<Option<Team>> {
        let row: Option<Team> = sqlx::query_as(
            r#"
            SELECT id, name, code, event_id, created_at
            FROM teams
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Read model of the event catalog: just the fields the registry
    /// validates against. The events domain owns the full entity.
    pub async fn get_event(&self, event_id: Uuid) -> Result<Option<EventSummary>> {
        let row: Option<EventSummary> = sqlx::query_as(
            r#"
            SELECT id, title, event_type, date, venue, max_participants, registration_deadline
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// List teams where the user holds an ACCEPTED membership, in
    /// membership insertion order
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Team>> {
        let rows: Vec<Team> = sqlx::query_as(
            r#"
            SELECT t.id, t.name, t.code, t.event_id, t.created_at
            FROM teams t
            INNER JOIN team_members m ON t.id = m.team_id
            WHERE m.user_id = $1 AND m.status = 'ACCEPTED'
            ORDER BY m.created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
