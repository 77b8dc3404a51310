//! Repository implementations for the Teams domain

pub mod members;
pub mod registrations;
pub mod teams;
pub mod transactions;
pub mod users;

use sqlx::{PgPool, Postgres, Transaction};

pub use members::{MemberRepository, MemberWithUser};
pub use registrations::RegistrationLedger;
pub use teams::TeamRepository;
pub use transactions::{create_member_tx, create_registration_tx, create_team_tx};
pub use users::UserRepository;

/// Combined repository access for the Teams domain
#[derive(Clone)]
pub struct TeamsRepositories {
    pool: PgPool,
    pub users: UserRepository,
    pub teams: TeamRepository,
    pub members: MemberRepository,
    pub registrations: RegistrationLedger,
}

impl TeamsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            teams: TeamRepository::new(pool.clone()),
            members: MemberRepository::new(pool.clone()),
            registrations: RegistrationLedger::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
