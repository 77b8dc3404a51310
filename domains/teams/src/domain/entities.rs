//! Domain entities for the CampusEvents teams domain
//!
//! Covers the identity store (users) and the team registry (teams, team
//! members, ledger write model). Each entity includes validation and
//! serialization; uniqueness invariants live in the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_common::{Error, Result};

/// Number of random bytes behind a join code (hex-encoded to 6 chars)
const JOIN_CODE_BYTES: usize = 3;

/// Length of a join code in characters
pub const JOIN_CODE_LEN: usize = 2 * JOIN_CODE_BYTES;

/// Maximum attempts to generate a join code that clears the unique index
pub const MAX_CODE_ATTEMPTS: u32 = 5;

/// User roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    Student,
    Organizer,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "STUDENT"),
            UserRole::Organizer => write!(f, "ORGANIZER"),
            UserRole::Admin => write!(f, "ADMIN"),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with validation
    pub fn new(id: Uuid, email: String, name: Option<String>, role: UserRole) -> Result<Self> {
        if !email.contains('@') || email.len() > 254 {
            return Err(Error::Validation("Invalid email format".to_string()));
        }

        if let Some(ref name) = name {
            if name.is_empty() || name.len() > 100 {
                return Err(Error::Validation(
                    "Name must be 1-100 characters".to_string(),
                ));
            }
        }

        let now = Utc::now();
        Ok(User {
            id,
            email,
            name,
            role,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Team member status
///
/// Only `Accepted` is ever written by the current create/join flows;
/// `Pending` is reserved for invite-based membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "member_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberStatus {
    Pending,
    #[default]
    Accepted,
}

impl MemberStatus {
    /// Check whether this member counts as an active participant
    pub fn is_active(&self) -> bool {
        matches!(self, MemberStatus::Accepted)
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberStatus::Pending => write!(f, "PENDING"),
            MemberStatus::Accepted => write!(f, "ACCEPTED"),
        }
    }
}

/// Team entity
///
/// The join code is issued once at creation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub event_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Create a new team with a freshly generated join code
    pub fn new(name: String, event_id: Uuid) -> Result<Self> {
        if name.is_empty() || name.len() > 100 {
            return Err(Error::Validation(
                "Team name must be 1-100 characters".to_string(),
            ));
        }

        Ok(Team {
            id: Uuid::new_v4(),
            name,
            code: Self::generate_code()?,
            event_id,
            created_at: Utc::now(),
        })
    }

    /// Generate a join code: 3 random bytes, hex-encoded, uppercased.
    ///
    /// Collisions are possible at this length; callers insert under the
    /// unique index on `teams.code` and regenerate on violation rather
    /// than assuming collision-freedom.
    pub fn generate_code() -> Result<String> {
        let mut bytes = [0u8; JOIN_CODE_BYTES];
        getrandom::getrandom(&mut bytes)
            .map_err(|e| Error::Internal(format!("Failed to generate random bytes: {}", e)))?;
        Ok(hex::encode(bytes).to_uppercase())
    }

    /// Validate join code format: exactly 6 uppercase hex characters
    pub fn validate_code(code: &str) -> Result<()> {
        if code.len() != JOIN_CODE_LEN
            || !code
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        {
            return Err(Error::Validation(
                "Join code must be 6 uppercase hexadecimal characters".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.name.len() > 100 {
            return Err(Error::Validation(
                "Team name must be 1-100 characters".to_string(),
            ));
        }

        Self::validate_code(&self.code)
    }
}

/// TeamMember entity - association between User and Team
///
/// (team_id, user_id) is unique at the storage layer; a user joins a
/// given team at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamMember {
    pub id: Uuid,
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub status: MemberStatus,
    pub created_at: DateTime<Utc>,
}

impl TeamMember {
    /// Create a new active membership
    pub fn new(team_id: Uuid, user_id: Uuid) -> Self {
        TeamMember {
            id: Uuid::new_v4(),
            team_id,
            user_id,
            status: MemberStatus::Accepted,
            created_at: Utc::now(),
        }
    }
}

/// Registration ledger write model.
///
/// The events domain owns the full registration entity; the team registry
/// only needs to append ledger entries inside its transactions. The
/// (user_id, event_id) unique index is the authoritative one-registration-
/// per-user-per-event guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Registration {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    /// Create a ledger entry for a team-based registration
    pub fn for_team(user_id: Uuid, event_id: Uuid, team_id: Uuid) -> Self {
        Registration {
            id: Uuid::new_v4(),
            user_id,
            event_id,
            team_id: Some(team_id),
            created_at: Utc::now(),
        }
    }
}

/// Event kind, as far as the team registry cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum EventKind {
    Solo,
    Team,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Solo => write!(f, "SOLO"),
            EventKind::Team => write!(f, "TEAM"),
        }
    }
}

/// Read model of the event catalog.
///
/// The events domain owns the full entity; the registry reads just the
/// fields it validates against.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EventSummary {
    pub id: Uuid,
    pub title: String,
    pub event_type: EventKind,
    pub date: DateTime<Utc>,
    pub venue: String,
    pub max_participants: i32,
    pub registration_deadline: DateTime<Utc>,
}
