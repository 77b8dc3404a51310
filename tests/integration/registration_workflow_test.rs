//! Solo registration and feedback workflow tests
//!
//! These tests require a local Postgres at TEST_DATABASE_URL and are
//! ignored by default - run locally with `cargo test -- --ignored`.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{bearer_token, request, response_json, TestApp};

#[tokio::test]
#[ignore] // Requires Postgres - run locally only
async fn test_solo_registration_then_duplicate_conflicts() {
    let app = TestApp::new().await.unwrap();

    let organizer = app.create_user("ORGANIZER").await.unwrap();
    let student = app.create_user("STUDENT").await.unwrap();
    let event_id = app.create_event(organizer, "SOLO").await.unwrap();

    let uri = format!("/api/events/{}/register", event_id);

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            &uri,
            Some(&bearer_token(student)),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["user_id"], json!(student));
    assert_eq!(body["team_id"], json!(null));

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            &uri,
            Some(&bearer_token(student)),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore] // Requires Postgres - run locally only
async fn test_solo_registration_rejects_team_event() {
    let app = TestApp::new().await.unwrap();

    let organizer = app.create_user("ORGANIZER").await.unwrap();
    let student = app.create_user("STUDENT").await.unwrap();
    let event_id = app.create_event(organizer, "TEAM").await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            &format!("/api/events/{}/register", event_id),
            Some(&bearer_token(student)),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_STATE");
}

#[tokio::test]
#[ignore] // Requires Postgres - run locally only
async fn test_event_creation_requires_organizer_role() {
    let app = TestApp::new().await.unwrap();

    let student = app.create_user("STUDENT").await.unwrap();

    let payload = json!({
        "title": "Unauthorized Event",
        "description": "Should not exist",
        "category": "TECHNICAL",
        "type": "SOLO",
        "date": "2026-12-01T09:00:00Z",
        "time": "09:00 AM",
        "registration_deadline": "2026-11-30T23:59:59Z",
        "venue": "Nowhere",
        "max_participants": 10
    });

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/events",
            Some(&bearer_token(student)),
            Some(payload),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore] // Requires Postgres - run locally only
async fn test_feedback_once_per_event() {
    let app = TestApp::new().await.unwrap();

    let organizer = app.create_user("ORGANIZER").await.unwrap();
    let student = app.create_user("STUDENT").await.unwrap();
    let event_id = app.create_event(organizer, "SOLO").await.unwrap();

    let uri = format!("/api/feedback/{}", event_id);
    let payload = json!({ "rating": 5, "comment": "Great event!" });

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            &uri,
            Some(&bearer_token(student)),
            Some(payload.clone()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            &uri,
            Some(&bearer_token(student)),
            Some(payload),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore] // Requires Postgres - run locally only
async fn test_event_listing_filters_by_type() {
    let app = TestApp::new().await.unwrap();

    let organizer = app.create_user("ORGANIZER").await.unwrap();
    let team_event = app.create_event(organizer, "TEAM").await.unwrap();
    app.create_event(organizer, "SOLO").await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(request(Method::GET, "/api/events?type=TEAM", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let events = body.as_array().unwrap();
    assert!(events.iter().all(|e| e["type"] == "TEAM"));
    assert!(events.iter().any(|e| e["id"] == json!(team_event)));
}
