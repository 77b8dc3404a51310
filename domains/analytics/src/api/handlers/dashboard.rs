//! Dashboard statistics API handler

use axum::{extract::State, Json};
use campus_common::{Error, Result};
use serde::Serialize;

use crate::{OrganizerStats, StudentStats};

use crate::api::middleware::{AnalyticsState, AuthUser};

/// Role-shaped dashboard payload
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DashboardResponse {
    Organizer(OrganizerStats),
    Student(StudentStats),
}

/// Get dashboard statistics for the current user
///
/// **GET /api/analytics/dashboard**
///
/// Organizers see aggregate stats over their own events; admins see the
/// whole platform; students see their registration and attendance counts.
pub async fn dashboard(
    auth_context: AuthUser,
    State(state): State<AnalyticsState>,
) -> Result<Json<DashboardResponse>> {
    let user = &auth_context.0.user;

    if user.role.can_manage_events() {
        let scope = if user.role.is_admin() {
            None
        } else {
            Some(user.id)
        };

        let stats = state
            .stats
            .organizer_stats(scope)
            .await
            .map_err(|e| Error::Internal(format!("Failed to compute organizer stats: {}", e)))?;

        Ok(Json(DashboardResponse::Organizer(stats)))
    } else {
        let stats = state
            .stats
            .student_stats(user.id)
            .await
            .map_err(|e| Error::Internal(format!("Failed to compute student stats: {}", e)))?;

        Ok(Json(DashboardResponse::Student(stats)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_response_untagged_serialization() {
        let organizer = DashboardResponse::Organizer(OrganizerStats {
            total_events: 2,
            total_registrations: 30,
            avg_rating: 4.2,
            events: vec![],
        });
        let json = serde_json::to_string(&organizer).unwrap();
        assert!(json.contains(r#""total_events":2"#));
        assert!(!json.contains("Organizer"));

        let student = DashboardResponse::Student(StudentStats {
            registrations: 3,
            attended: 1,
        });
        let json = serde_json::to_string(&student).unwrap();
        assert!(json.contains(r#""registrations":3"#));
        assert!(json.contains(r#""attended":1"#));
    }
}
