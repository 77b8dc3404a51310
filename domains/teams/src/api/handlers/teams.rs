//! Team registry API handlers
//!
//! Implements team creation, join-by-code, and team listing with the
//! registration invariants enforced through short transactions.

use axum::{extract::State, http::StatusCode, Json};
use campus_common::{Error, Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::repository::{create_member_tx, create_registration_tx, create_team_tx};
use crate::{
    EventKind, EventSummary, MemberStatus, MemberWithUser, Registration, Team, TeamMember,
    MAX_CODE_ATTEMPTS,
};

use crate::api::middleware::{AuthUser, TeamsState};

/// Request for creating a new team
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    /// Team display name (1-100 chars)
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Event this team competes in (must be a TEAM event)
    pub event_id: Uuid,
}

/// Request for joining a team by code.
///
/// The code is matched exactly against issued codes; no format
/// validation happens before lookup.
#[derive(Debug, Deserialize, Validate)]
pub struct JoinTeamRequest {
    pub code: String,
}

/// Team member with user details, as rendered in team responses
#[derive(Debug, Serialize)]
pub struct TeamMemberInfo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub status: MemberStatus,
    pub joined_at: DateTime<Utc>,
}

impl From<MemberWithUser> for TeamMemberInfo {
    fn from(m: MemberWithUser) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            name: m.user_name,
            email: m.user_email,
            status: m.status,
            joined_at: m.created_at,
        }
    }
}

/// Response for team creation
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub event_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub members: Vec<TeamMemberInfo>,
}

impl TeamResponse {
    fn from_team(team: Team, members: Vec<MemberWithUser>) -> Self {
        Self {
            id: team.id,
            name: team.name,
            code: team.code,
            event_id: team.event_id,
            created_at: team.created_at,
            members: members.into_iter().map(TeamMemberInfo::from).collect(),
        }
    }
}

/// Bare membership response for join operations
#[derive(Debug, Serialize)]
pub struct TeamMemberResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub status: MemberStatus,
    pub created_at: DateTime<Utc>,
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(member: TeamMember) -> Self {
        Self {
            id: member.id,
            team_id: member.team_id,
            user_id: member.user_id,
            status: member.status,
            created_at: member.created_at,
        }
    }
}

/// Response for a successful join
#[derive(Debug, Serialize)]
pub struct JoinTeamResponse {
    pub message: String,
    pub member: TeamMemberResponse,
}

/// Team with its event and member list, as rendered by the my-teams listing
#[derive(Debug, Serialize)]
pub struct TeamDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub event: EventSummary,
    pub members: Vec<TeamMemberInfo>,
}

/// Check whether an sqlx error is a unique violation on a named constraint
fn unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db)
            if db.is_unique_violation() && db.constraint() == Some(constraint)
    )
}

/// Create a new team
///
/// **POST /api/teams**
///
/// Creates a team for a TEAM event with the caller as founding member,
/// issuing a fresh join code. Team, founding member, and the caller's
/// registration are inserted in one transaction: all three commit or
/// none do.
pub async fn create_team(
    auth_context: AuthUser,
    State(state): State<TeamsState>,
    ValidatedJson(request): ValidatedJson<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>)> {
    let user = &auth_context.0.user;

    // Validate against the event catalog
    let event = state
        .repos
        .teams
        .get_event(request.event_id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to load event: {}", e)))?
        .ok_or_else(|| Error::NotFound("Event not found".to_string()))?;

    if event.event_type != EventKind::Team {
        return Err(Error::InvalidState("This is not a team event".to_string()));
    }

    // Note: unlike join_team, there is no ledger pre-check here. A creator
    // who already holds a registration for the event hits the unique index
    // inside the transaction and nothing is persisted.
    let mut attempts = 0;
    let created_team = loop {
        attempts += 1;

        let team = Team::new(request.name.clone(), request.event_id)?;

        let mut tx = state
            .repos
            .begin()
            .await
            .map_err(|e| Error::Internal(format!("Failed to begin transaction: {}", e)))?;

        let created = match create_team_tx(&mut tx, &team).await {
            Ok(created) => created,
            Err(e) if unique_violation(&e, "teams_code_key") => {
                // Code collision: the dropped transaction rolls back.
                if attempts >= MAX_CODE_ATTEMPTS {
                    return Err(Error::Internal(format!(
                        "Failed to allocate a unique join code after {} attempts",
                        MAX_CODE_ATTEMPTS
                    )));
                }
                tracing::warn!(attempt = attempts, "Join code collision, regenerating");
                continue;
            }
            Err(e) => return Err(Error::Internal(format!("Failed to create team: {}", e))),
        };

        let member = TeamMember::new(created.id, user.id);
        create_member_tx(&mut tx, &member)
            .await
            .map_err(|e| Error::Internal(format!("Failed to create team member: {}", e)))?;

        let registration = Registration::for_team(user.id, created.event_id, created.id);
        create_registration_tx(&mut tx, &registration)
            .await
            .map_err(|e| {
                if unique_violation(&e, "registrations_user_id_event_id_key") {
                    Error::Conflict("Already registered for this event".to_string())
                } else {
                    Error::Internal(format!("Failed to create registration: {}", e))
                }
            })?;

        // Explicit commit — drop without commit = rollback (RAII)
        tx.commit()
            .await
            .map_err(|e| Error::Internal(format!("Failed to commit transaction: {}", e)))?;

        break created;
    };

    let members = state
        .repos
        .members
        .list_by_team(created_team.id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to list team members: {}", e)))?;

    Ok((
        StatusCode::CREATED,
        Json(TeamResponse::from_team(created_team, members)),
    ))
}

/// Join a team by code
///
/// **POST /api/teams/join**
///
/// Looks up the team by its join code, rejects callers already registered
/// for the team's event, then inserts the member and registration rows in
/// one transaction. Two concurrent joins for the same user and event can
/// both pass the ledger pre-check, but only one clears the unique index on
/// registrations; the other observes Conflict.
pub async fn join_team(
    auth_context: AuthUser,
    State(state): State<TeamsState>,
    ValidatedJson(request): ValidatedJson<JoinTeamRequest>,
) -> Result<Json<JoinTeamResponse>> {
    let user = &auth_context.0.user;

    let team = state
        .repos
        .teams
        .get_by_code(&request.code)
        .await
        .map_err(|e| Error::Internal(format!("Failed to look up team code: {}", e)))?
        .ok_or_else(|| Error::NotFound("Invalid team code".to_string()))?;

    // Ledger pre-check for the friendly error; the unique index in the
    // transaction below is what actually closes the race.
    let existing = state
        .repos
        .registrations
        .find_by_user_and_event(user.id, team.event_id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to check registrations: {}", e)))?;

    if existing.is_some() {
        return Err(Error::Conflict(
            "Already registered for this event".to_string(),
        ));
    }

    if state.enforce_capacity {
        let event = state
            .repos
            .teams
            .get_event(team.event_id)
            .await
            .map_err(|e| Error::Internal(format!("Failed to load event: {}", e)))?
            .ok_or_else(|| Error::Internal("Team references a missing event".to_string()))?;

        let registered = state
            .repos
            .registrations
            .count_for_event(team.event_id)
            .await
            .map_err(|e| Error::Internal(format!("Failed to count registrations: {}", e)))?;

        if registered >= i64::from(event.max_participants) {
            return Err(Error::Conflict("Event is at full capacity".to_string()));
        }
    }

    let mut tx = state
        .repos
        .begin()
        .await
        .map_err(|e| Error::Internal(format!("Failed to begin transaction: {}", e)))?;

    let member = TeamMember::new(team.id, user.id);
    let created_member = create_member_tx(&mut tx, &member).await.map_err(|e| {
        if unique_violation(&e, "team_members_team_id_user_id_key") {
            Error::Conflict("Already a member of this team".to_string())
        } else {
            Error::Internal(format!("Failed to create team member: {}", e))
        }
    })?;

    let registration = Registration::for_team(user.id, team.event_id, team.id);
    create_registration_tx(&mut tx, &registration)
        .await
        .map_err(|e| {
            if unique_violation(&e, "registrations_user_id_event_id_key") {
                Error::Conflict("Already registered for this event".to_string())
            } else {
                Error::Internal(format!("Failed to create registration: {}", e))
            }
        })?;

    // Explicit commit — drop without commit = rollback (RAII)
    tx.commit()
        .await
        .map_err(|e| Error::Internal(format!("Failed to commit transaction: {}", e)))?;

    Ok(Json(JoinTeamResponse {
        message: "Joined team successfully".to_string(),
        member: TeamMemberResponse::from(created_member),
    }))
}

/// List the caller's teams
///
/// **GET /api/teams/my-teams**
///
/// Returns every team for which the caller holds an ACCEPTED member row,
/// each populated with its member list and parent event, in membership
/// insertion order.
pub async fn my_teams(
    auth_context: AuthUser,
    State(state): State<TeamsState>,
) -> Result<Json<Vec<TeamDetailResponse>>> {
    let user = &auth_context.0.user;

    let teams = state
        .repos
        .teams
        .list_for_user(user.id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to list teams: {}", e)))?;

    let mut responses = Vec::with_capacity(teams.len());
    for team in teams {
        let members = state
            .repos
            .members
            .list_by_team(team.id)
            .await
            .map_err(|e| Error::Internal(format!("Failed to list team members: {}", e)))?;

        let event = state
            .repos
            .teams
            .get_event(team.event_id)
            .await
            .map_err(|e| Error::Internal(format!("Failed to load event: {}", e)))?
            .ok_or_else(|| Error::Internal("Team references a missing event".to_string()))?;

        responses.push(TeamDetailResponse {
            id: team.id,
            name: team.name,
            code: team.code,
            created_at: team.created_at,
            event,
            members: members.into_iter().map(TeamMemberInfo::from).collect(),
        });
    }

    Ok(Json(responses))
}
