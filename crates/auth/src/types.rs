//! Auth read-model types
//!
//! Lightweight views of the same DB rows owned by the teams domain.
//! These types carry only the fields needed for authentication and
//! authorization.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Lightweight identity for authenticated users.
///
/// Contains the fields needed by auth middleware and most handlers.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: AuthRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User role for auth decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthRole {
    Student,
    Organizer,
    Admin,
}

impl AuthRole {
    /// Check if this role can create and manage events
    pub fn can_manage_events(&self) -> bool {
        matches!(self, AuthRole::Organizer | AuthRole::Admin)
    }

    /// Check if this role has platform-wide visibility
    pub fn is_admin(&self) -> bool {
        matches!(self, AuthRole::Admin)
    }
}

impl std::fmt::Display for AuthRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthRole::Student => write!(f, "STUDENT"),
            AuthRole::Organizer => write!(f, "ORGANIZER"),
            AuthRole::Admin => write!(f, "ADMIN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_permissions() {
        assert!(!AuthRole::Student.can_manage_events());
        assert!(AuthRole::Organizer.can_manage_events());
        assert!(AuthRole::Admin.can_manage_events());

        assert!(!AuthRole::Student.is_admin());
        assert!(!AuthRole::Organizer.is_admin());
        assert!(AuthRole::Admin.is_admin());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(AuthRole::Student.to_string(), "STUDENT");
        assert_eq!(AuthRole::Organizer.to_string(), "ORGANIZER");
        assert_eq!(AuthRole::Admin.to_string(), "ADMIN");
    }
}
