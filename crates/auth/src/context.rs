//! Authorization context for authenticated users

use crate::types::{AuthIdentity, AuthRole};

/// Represents an authenticated user context
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
}

impl AuthContext {
    /// Create new auth context for a user
    pub fn new(user: AuthIdentity) -> Self {
        Self { user }
    }

    /// Check if the user can create and manage events
    pub fn is_organizer(&self) -> bool {
        self.user.role.can_manage_events()
    }

    /// Check if the user has platform-wide visibility
    pub fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }
}
