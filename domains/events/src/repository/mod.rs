//! Repository implementations for the Events domain

pub mod events;
pub mod feedback;
pub mod registrations;

use sqlx::PgPool;

pub use events::EventRepository;
pub use feedback::FeedbackRepository;
pub use registrations::RegistrationRepository;

/// Combined repository access for the Events domain
#[derive(Clone)]
pub struct EventsRepositories {
    pub events: EventRepository,
    pub registrations: RegistrationRepository,
    pub feedback: FeedbackRepository,
}

impl EventsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            registrations: RegistrationRepository::new(pool.clone()),
            feedback: FeedbackRepository::new(pool),
        }
    }
}
