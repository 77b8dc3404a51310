//! Transactional free functions for the Teams domain
//!
//! The create/join flows require their multi-entity writes to be applied
//! as a single atomic unit: every function here runs against a caller-owned
//! transaction, and dropping the transaction without commit rolls back.
//! Registrations are written here too — the registry appends ledger entries
//! inside the same transaction as the membership rows.

use crate::domain::entities::{Registration, Team, TeamMember};
use sqlx::{Postgres, Transaction};

/// Insert a team within an existing transaction.
///
/// Fails with a unique violation on `teams_code_key` if the generated
/// join code is already taken; callers regenerate and retry.
pub async fn create_team_tx(
    transaction: &mut Transaction<'_, Postgres>,
    team: &Team,
) -> std::result::Result<Team, sqlx::Error> {
    let created: Team = sqlx::query_as(
        r#"
        INSERT INTO teams (id, name, code, event_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, code, event_id, created_at
        "#,
    )
    .bind(team.id)
    .bind(&team.name)
    .bind(&team.code)
    .bind(team.event_id)
    .bind(team.created_at)
    .fetch_one(&mut **transaction)
    .await?;
    Ok(created)
}

/// Insert a team member within an existing transaction.
pub async fn create_member_tx(
    transaction: &mut Transaction<'_, Postgres>,
    member: &TeamMember,
) -> std::result::Result<TeamMember, sqlx::Error> {
    let created: TeamMember = sqlx::query_as(
        r#"
        INSERT INTO team_members (id, team_id, user_id, status, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, team_id, user_id, status, created_at
        "#,
    )
    .bind(member.id)
    .bind(member.team_id)
    .bind(member.user_id)
    .bind(member.status)
    .bind(member.created_at)
    .fetch_one(&mut **transaction)
    .await?;
    Ok(created)
}

/// Append a registration ledger entry within an existing transaction.
///
/// Fails with a unique violation on `registrations_user_id_event_id_key`
/// if the user already holds a registration for the event — this is the
/// storage-level guard that closes the check-then-insert race.
pub async fn create_registration_tx(
    transaction: &mut Transaction<'_, Postgres>,
    registration: &Registration,
) -> std::result::Result<Registration, sqlx::Error> {
    let created: Registration = sqlx::query_as(
        r#"
        INSERT INTO registrations (id, user_id, event_id, team_id, has_attended, created_at)
        VALUES ($1, $2, $3, $4, FALSE, $5)
        RETURNING id, user_id, event_id, team_id, created_at
        "#,
    )
    .bind(registration.id)
    .bind(registration.user_id)
    .bind(registration.event_id)
    .bind(registration.team_id)
    .bind(registration.created_at)
    .fetch_one(&mut **transaction)
    .await?;
    Ok(created)
}
