//! Account API handlers
//!
//! Implements:
//! - GET /api/auth/me - Current user profile
//! - POST /api/auth/logout - Stateless logout acknowledgement

use axum::{extract::State, Json};
use campus_common::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{User, UserRole};

use crate::api::middleware::{AuthUser, TeamsState};

/// Response for user profile operations
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// GET /api/auth/me - Current user profile
pub async fn me(
    auth_context: AuthUser,
    State(state): State<TeamsState>,
) -> Result<Json<UserResponse>> {
    let user = state
        .repos
        .users
        .get_by_id(auth_context.0.user.id)
        .await
        .map_err(|e| Error::Internal(format!("Failed to load user: {}", e)))?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}

/// POST /api/auth/logout - Stateless logout acknowledgement
///
/// Bearer tokens are not stored server-side; the client discards its copy.
pub async fn logout() -> Json<Value> {
    Json(json!({ "message": "Logged out successfully" }))
}
