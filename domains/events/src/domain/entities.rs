//! Domain entities for the CampusEvents events domain
//!
//! The event catalog is owned by organizers and read-only to the team
//! registry. Registrations are the canonical record that a user is
//! participating in an event, whether solo or via a team.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use campus_common::{Error, Result};

/// Event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_category", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum EventCategory {
    Technical,
    Cultural,
    Sports,
    Workshop,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Technical => write!(f, "TECHNICAL"),
            EventCategory::Cultural => write!(f, "CULTURAL"),
            EventCategory::Sports => write!(f, "SPORTS"),
            EventCategory::Workshop => write!(f, "WORKSHOP"),
        }
    }
}

/// Event participation types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    Solo,
    Team,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Solo => write!(f, "SOLO"),
            EventType::Team => write!(f, "TEAM"),
        }
    }
}

/// Event entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub event_type: EventType,
    pub date: DateTime<Utc>,
    /// Display time, e.g. "09:00 AM"
    pub time: String,
    pub registration_deadline: DateTime<Utc>,
    pub venue: String,
    pub banner: Option<String>,
    pub max_participants: i32,
    pub is_paid: bool,
    pub price: i32,
    pub rules: Json<Vec<String>>,
    pub organizer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a new event with validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: String,
        category: EventCategory,
        event_type: EventType,
        date: DateTime<Utc>,
        time: String,
        registration_deadline: DateTime<Utc>,
        venue: String,
        banner: Option<String>,
        max_participants: i32,
        is_paid: bool,
        price: i32,
        rules: Vec<String>,
        organizer_id: Uuid,
    ) -> Result<Self> {
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            title,
            description,
            category,
            event_type,
            date,
            time,
            registration_deadline,
            venue,
            banner,
            max_participants,
            is_paid,
            price,
            rules: Json(rules),
            organizer_id,
            created_at: now,
            updated_at: now,
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() || self.title.len() > 200 {
            return Err(Error::Validation(
                "Title must be 1-200 characters".to_string(),
            ));
        }

        if self.venue.is_empty() || self.venue.len() > 200 {
            return Err(Error::Validation(
                "Venue must be 1-200 characters".to_string(),
            ));
        }

        if self.max_participants < 1 {
            return Err(Error::Validation(
                "Max participants must be at least 1".to_string(),
            ));
        }

        if self.price < 0 {
            return Err(Error::Validation("Price cannot be negative".to_string()));
        }

        if self.is_paid && self.price == 0 {
            return Err(Error::Validation(
                "Paid events must have a non-zero price".to_string(),
            ));
        }

        if self.registration_deadline > self.date {
            return Err(Error::Validation(
                "Registration deadline cannot be after the event date".to_string(),
            ));
        }

        Ok(())
    }

    /// Check whether registrations are still open
    pub fn registration_open(&self, now: DateTime<Utc>) -> bool {
        now <= self.registration_deadline
    }
}

/// Registration entity - the canonical record that a user participates
/// in an event. Unique on (user_id, event_id) at the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Registration {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub team_id: Option<Uuid>,
    pub has_attended: bool,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    /// Create a solo registration
    pub fn solo(user_id: Uuid, event_id: Uuid) -> Self {
        Registration {
            id: Uuid::new_v4(),
            user_id,
            event_id,
            team_id: None,
            has_attended: false,
            created_at: Utc::now(),
        }
    }
}

/// Feedback entity - one rating per user per event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Feedback {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub improvements: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    /// Create feedback with validation
    pub fn new(
        user_id: Uuid,
        event_id: Uuid,
        rating: i32,
        comment: Option<String>,
        improvements: Option<String>,
    ) -> Result<Self> {
        if !(1..=5).contains(&rating) {
            return Err(Error::Validation("Rating must be between 1 and 5".to_string()));
        }

        for text in [&comment, &improvements].into_iter().flatten() {
            if text.len() > 2000 {
                return Err(Error::Validation(
                    "Feedback text must be at most 2000 characters".to_string(),
                ));
            }
        }

        Ok(Feedback {
            id: Uuid::new_v4(),
            user_id,
            event_id,
            rating,
            comment,
            improvements,
            created_at: Utc::now(),
        })
    }
}
