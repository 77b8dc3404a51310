//! Teams domain: users, team registry, join codes, registration invariants

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export repository types
pub use repository::{
    create_member_tx, create_registration_tx, create_team_tx, MemberRepository, MemberWithUser,
    RegistrationLedger, TeamRepository, TeamsRepositories, UserRepository,
};

// Re-export API types
pub use api::routes;
pub use api::TeamsState;

// Re-export auth types from campus-auth for convenience
pub use campus_auth::{AuthBackend, AuthConfig, AuthContext, AuthError, AuthRole, AuthUser};
