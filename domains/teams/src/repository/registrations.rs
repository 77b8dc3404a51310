//! Registration ledger reads
//!
//! The ledger is independently consulted before admitting a join; the
//! unique index on (user_id, event_id) remains the authoritative guard.
//! The events domain owns the full registration entity.

use crate::domain::entities::Registration;
use campus_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct RegistrationLedger {
    pool: PgPool,
}

impl RegistrationLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an existing registration for a user and event
    pub async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<Registration>> {
        let row: Option<Registration> = sqlx::query_as(
            r#"
            SELECT id, user_id, event_id, team_id, created_at
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

    /// Count registrations for an event (used by the capacity check)
    pub async fn count_for_event(&self, event_id: Uuid) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM registrations
            WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
