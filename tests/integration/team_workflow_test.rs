//! Team registry workflow tests
//!
//! End-to-end coverage of team creation, join-by-code, and the
//! registration invariants. These tests require a local Postgres at
//! TEST_DATABASE_URL and are ignored by default - run locally with
//! `cargo test -- --ignored`.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{bearer_token, request, response_json, TestApp};

#[tokio::test]
#[ignore] // Requires Postgres - run locally only
async fn test_create_team_creates_member_and_registration() {
    let app = TestApp::new().await.unwrap();

    let organizer = app.create_user("ORGANIZER").await.unwrap();
    let student = app.create_user("STUDENT").await.unwrap();
    let event_id = app.create_event(organizer, "TEAM").await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/teams",
            Some(&bearer_token(student)),
            Some(json!({ "name": "Alpha", "event_id": event_id })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;

    assert_eq!(body["name"], "Alpha");
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code
        .chars()
        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));

    // Exactly one founding member, ACCEPTED, the creator
    let members = body["members"].as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["user_id"], json!(student));
    assert_eq!(members[0]["status"], "ACCEPTED");

    // The creator's registration exists and references the team
    let registration: (Option<uuid::Uuid>,) = sqlx::query_as(
        "SELECT team_id FROM registrations WHERE user_id = $1 AND event_id = $2",
    )
    .bind(student)
    .bind(event_id)
    .fetch_one(&app.pool)
    .await
    .unwrap();
    assert_eq!(
        registration.0,
        Some(uuid::Uuid::parse_str(body["id"].as_str().unwrap()).unwrap())
    );
}

#[tokio::test]
#[ignore] // Requires Postgres - run locally only
async fn test_create_team_rejects_solo_event() {
    let app = TestApp::new().await.unwrap();

    let organizer = app.create_user("ORGANIZER").await.unwrap();
    let student = app.create_user("STUDENT").await.unwrap();
    let event_id = app.create_event(organizer, "SOLO").await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/teams",
            Some(&bearer_token(student)),
            Some(json!({ "name": "Beta", "event_id": event_id })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_STATE");
}

#[tokio::test]
#[ignore] // Requires Postgres - run locally only
async fn test_create_team_missing_event_leaves_no_partial_state() {
    let app = TestApp::new().await.unwrap();

    let student = app.create_user("STUDENT").await.unwrap();

    let teams_before = app.count("teams").await.unwrap();
    let members_before = app.count("team_members").await.unwrap();
    let registrations_before = app.count("registrations").await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/teams",
            Some(&bearer_token(student)),
            Some(json!({ "name": "Ghost", "event_id": uuid::Uuid::new_v4() })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(app.count("teams").await.unwrap(), teams_before);
    assert_eq!(app.count("team_members").await.unwrap(), members_before);
    assert_eq!(
        app.count("registrations").await.unwrap(),
        registrations_before
    );
}

#[tokio::test]
#[ignore] // Requires Postgres - run locally only
async fn test_join_team_by_code_then_duplicate_conflicts() {
    let app = TestApp::new().await.unwrap();

    let organizer = app.create_user("ORGANIZER").await.unwrap();
    let creator = app.create_user("STUDENT").await.unwrap();
    let joiner = app.create_user("STUDENT").await.unwrap();
    let event_id = app.create_event(organizer, "TEAM").await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/teams",
            Some(&bearer_token(creator)),
            Some(json!({ "name": "Alpha", "event_id": event_id })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let team = response_json(response).await;
    let code = team["code"].as_str().unwrap().to_string();

    // First join succeeds
    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/teams/join",
            Some(&bearer_token(joiner)),
            Some(json!({ "code": code })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Joined team successfully");
    assert_eq!(body["member"]["user_id"], json!(joiner));
    assert_eq!(body["member"]["status"], "ACCEPTED");

    // Second join for the same event conflicts
    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/teams/join",
            Some(&bearer_token(joiner)),
            Some(json!({ "code": code })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Already registered for this event"));
}

#[tokio::test]
#[ignore] // Requires Postgres - run locally only
async fn test_join_team_invalid_code_is_404() {
    let app = TestApp::new().await.unwrap();

    let joiner = app.create_user("STUDENT").await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/teams/join",
            Some(&bearer_token(joiner)),
            Some(json!({ "code": "ZZZZZZ" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid team code"));
}

#[tokio::test]
#[ignore] // Requires Postgres - run locally only
async fn test_concurrent_joins_for_same_event_yield_one_registration() {
    let app = TestApp::new().await.unwrap();

    let organizer = app.create_user("ORGANIZER").await.unwrap();
    let creator_a = app.create_user("STUDENT").await.unwrap();
    let creator_b = app.create_user("STUDENT").await.unwrap();
    let joiner = app.create_user("STUDENT").await.unwrap();
    let event_id = app.create_event(organizer, "TEAM").await.unwrap();

    // Two teams competing in the same event
    let mut codes = Vec::new();
    for (creator, name) in [(creator_a, "Alpha"), (creator_b, "Beta")] {
        let response = app
            .router
            .clone()
            .oneshot(request(
                Method::POST,
                "/api/teams",
                Some(&bearer_token(creator)),
                Some(json!({ "name": name, "event_id": event_id })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response_json(response).await;
        codes.push(body["code"].as_str().unwrap().to_string());
    }

    // The same user races to join both teams; both joins pass the ledger
    // pre-check, but the unique index admits exactly one.
    let token = bearer_token(joiner);
    let join_a = app.router.clone().oneshot(request(
        Method::POST,
        "/api/teams/join",
        Some(&token),
        Some(json!({ "code": codes[0] })),
    ));
    let join_b = app.router.clone().oneshot(request(
        Method::POST,
        "/api/teams/join",
        Some(&token),
        Some(json!({ "code": codes[1] })),
    ));

    let (res_a, res_b) = tokio::join!(join_a, join_b);
    let statuses = [res_a.unwrap().status(), res_b.unwrap().status()];

    let successes = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    let conflicts = statuses
        .iter()
        .filter(|s| **s == StatusCode::CONFLICT)
        .count();
    assert_eq!(successes, 1, "statuses: {:?}", statuses);
    assert_eq!(conflicts, 1, "statuses: {:?}", statuses);

    let registrations: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM registrations WHERE user_id = $1 AND event_id = $2")
            .bind(joiner)
            .bind(event_id)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(registrations.0, 1);
}

#[tokio::test]
#[ignore] // Requires Postgres - run locally only
async fn test_my_teams_lists_members_and_event() {
    let app = TestApp::new().await.unwrap();

    let organizer = app.create_user("ORGANIZER").await.unwrap();
    let creator = app.create_user("STUDENT").await.unwrap();
    let joiner = app.create_user("STUDENT").await.unwrap();
    let event_id = app.create_event(organizer, "TEAM").await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/teams",
            Some(&bearer_token(creator)),
            Some(json!({ "name": "Alpha", "event_id": event_id })),
        ))
        .await
        .unwrap();
    let team = response_json(response).await;
    let code = team["code"].as_str().unwrap().to_string();

    app.router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/teams/join",
            Some(&bearer_token(joiner)),
            Some(json!({ "code": code })),
        ))
        .await
        .unwrap();

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::GET,
            "/api/teams/my-teams",
            Some(&bearer_token(joiner)),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let teams = body.as_array().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["name"], "Alpha");
    assert_eq!(teams[0]["event"]["id"], json!(event_id));
    assert_eq!(teams[0]["members"].as_array().unwrap().len(), 2);
}
