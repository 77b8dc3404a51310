//! Router-level tests that run without a database
//!
//! The pool is lazily connected, so anything that fails before reaching
//! the database (health, missing/garbage credentials, unknown routes)
//! can be asserted here.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::ServiceExt;

use common::{lazy_app, request};

#[tokio::test]
async fn test_health_check() {
    let app = lazy_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_root_banner() {
    let app = lazy_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = lazy_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_my_teams_requires_authentication() {
    let app = lazy_app().await;

    let response = app
        .oneshot(request(Method::GET, "/api/teams/my-teams", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_team_rejects_garbage_token() {
    let app = lazy_app().await;

    let response = app
        .oneshot(request(
            Method::POST,
            "/api/teams",
            Some("Bearer not-a-jwt"),
            Some(serde_json::json!({ "name": "Alpha", "event_id": uuid::Uuid::new_v4() })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_join_team_requires_authentication() {
    let app = lazy_app().await;

    let response = app
        .oneshot(request(
            Method::POST,
            "/api/teams/join",
            None,
            Some(serde_json::json!({ "code": "A1B2C3" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_dashboard_requires_authentication() {
    let app = lazy_app().await;

    let response = app
        .oneshot(request(Method::GET, "/api/analytics/dashboard", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_rejects_basic_auth_scheme() {
    let app = lazy_app().await;

    let uri = format!("/api/events/{}/register", uuid::Uuid::new_v4());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
