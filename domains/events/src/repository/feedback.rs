//! Feedback repository

use crate::domain::entities::Feedback;
use campus_common::RepositoryError;
use sqlx::PgPool;

#[derive(Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert new feedback.
    ///
    /// Returns `RepositoryError::AlreadyExists` when the user already
    /// submitted feedback for the event.
    pub async fn create(
        &self,
        feedback: &Feedback,
    ) -> std::result::Result<Feedback, RepositoryError> {
        let created: Feedback = sqlx::query_as(
            r#"
            INSERT INTO feedback (id, user_id, event_id, rating, comment, improvements, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, event_id, rating, comment, improvements, created_at
            "#,
        )
        .bind(feedback.id)
        .bind(feedback.user_id)
        .bind(feedback.event_id)
        .bind(feedback.rating)
        .bind(&feedback.comment)
        .bind(&feedback.improvements)
        .bind(feedback.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(created)
    }
}
