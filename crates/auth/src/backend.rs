//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns auth-specific SQL queries.
//! Uses runtime `sqlx::query_as` consistent with the cross-domain
//! read pattern used throughout the workspace.

use sqlx::PgPool;
use uuid::Uuid;

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::types::{AuthIdentity, AuthRole};

/// Concrete authentication backend.
///
/// Wraps a database pool and auth configuration. Provides methods
/// to validate tokens and load (or provision) the caller's identity.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Find user identity by ID (lightweight read model of the users table)
    pub(crate) async fn find_user(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        let user: Option<AuthIdentity> = sqlx::query_as(
            r#"
            SELECT id, email, name, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            AuthError::UserLoadError
        })?;

        Ok(user)
    }

    /// Provision a new user from JWT claims (first-login user creation).
    ///
    /// Called on the first authenticated request when the user doesn't exist
    /// in the DB. Uses `ON CONFLICT DO NOTHING` to handle concurrent
    /// first-requests safely. The role claim is honored here and never again:
    /// the stored row wins on every later request.
    async fn provision_user_from_claims(
        &self,
        user_id: Uuid,
        claims: &Claims,
    ) -> Result<AuthIdentity, AuthError> {
        let email = claims.email.as_deref().ok_or(AuthError::MissingEmail)?;

        // Anything other than an explicit ORGANIZER request becomes STUDENT;
        // ADMIN accounts are seeded out-of-band.
        let role = match claims.role.as_deref() {
            Some("ORGANIZER") => AuthRole::Organizer,
            _ => AuthRole::Student,
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(email)
        .bind(claims.name.as_deref())
        .bind(role)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %user_id, "Failed to provision user");
            AuthError::UserProvisionFailed
        })?;

        tracing::info!(user_id = %user_id, email = %email, role = %role, "User provisioned at first login");

        self.find_user(user_id).await?.ok_or_else(|| {
            tracing::error!(user_id = %user_id, "User not found after provisioning");
            AuthError::UserProvisionFailed
        })
    }

    /// Shared JWT authentication logic used by the extractors.
    pub(crate) async fn authenticate_jwt(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_jwt_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        let user = match self.find_user(user_id).await? {
            Some(user) => user,
            None => self.provision_user_from_claims(user_id, &claims).await?,
        };

        Ok(AuthContext::new(user))
    }
}
