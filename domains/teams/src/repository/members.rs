//! Team member repository

use crate::domain::entities::{MemberStatus, TeamMember};
use campus_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Membership with joined user details for list responses
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MemberWithUser {
    pub id: Uuid,
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub status: MemberStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub user_name: Option<String>,
    pub user_email: String,
}

#[derive(Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get membership by team and user
    pub async fn get_by_team_and_user(
        &self,
        team_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TeamMember>> {
        let row: Option<TeamMember> = sqlx::query_as(
            r#"
            SELECT id, team_id, user_id, status, created_at
            FROM team_members
            WHERE team_id = $1 AND user_id = $2
            "#,
        )
        .bind(team_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// List all members of a team with user details, in insertion order
    pub async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<MemberWithUser>> {
        let members: Vec<MemberWithUser> = sqlx::query_as(
            r#"
            SELECT m.id, m.team_id, m.user_id, m.status, m.created_at,
                   u.name as user_name, u.email as user_email
            FROM team_members m
            INNER JOIN users u ON m.user_id = u.id
            WHERE m.team_id = $1
            ORDER BY m.created_at ASC
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }
}
