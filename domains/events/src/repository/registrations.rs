//! Registration repository
//!
//! Uniqueness on (user_id, event_id) is enforced by the storage layer;
//! inserts surface violations as `RepositoryError::AlreadyExists` so
//! handlers can report Conflict.

use crate::domain::entities::Registration;
use campus_common::{RepositoryError, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find registration for a user and event
    pub async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<Registration>> {
        let row: Option<Registration> = sqlx::query_as(
            r#"
            SELECT id, user_id, event_id, team_id, has_attended, created_at
            FROM registrations
            WHERE user_id = $1 AND event_id = $2
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// List registrations for a user, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Registration>> {
        let rows: Vec<Registration> = sqlx::query_as(
            r#"
            SELECT id, user_id, event_id, team_id, has_attended, created_at
            FROM registrations
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a new registration.
    ///
    /// Returns `RepositoryError::AlreadyExists` when the user already
    /// holds a registration for the event.
    pub async fn create(
        &self,
        registration: &Registration,
    ) -> std::result::Result<Registration, RepositoryError> {
        let created: Registration = sqlx::query_as(
            r#"
            INSERT INTO registrations (id, user_id, event_id, team_id, has_attended, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, event_id, team_id, has_attended, created_at
            "#,
        )
        .bind(registration.id)
        .bind(registration.user_id)
        .bind(registration.event_id)
        .bind(registration.team_id)
        .bind(registration.has_attended)
        .bind(registration.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(created)
    }
}
