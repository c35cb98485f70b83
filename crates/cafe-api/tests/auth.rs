mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn register_login_and_me() {
    let app = TestApp::new();

    let (status, user) = app.register("barista", "cashier").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["username"], "barista");
    assert_eq!(user["role"], "cashier");
    assert_eq!(user["is_active"], true);
    assert!(user.get("password_hash").is_none());

    let (status, token) = app
        .request(
            Method::POST,
            "/auth/token",
            None,
            Some(json!({ "username": "barista", "password": "secret123" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(token["token_type"], "bearer");

    let access = token["access_token"].as_str().unwrap();
    let (status, me) = app.get("/auth/me", access).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "barista");
    assert!(!me["last_login"].is_null());
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let app = TestApp::new();

    let (status, _) = app.register("chef", "cook").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.register("chef", "admin").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Username already registered");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new();
    app.register("owner", "admin").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/auth/token",
            None,
            Some(json!({ "username": "owner", "password": "not-it" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Incorrect username or password");

    let (status, _) = app
        .request(
            Method::POST,
            "/auth/token",
            None,
            Some(json!({ "username": "ghost", "password": "secret123" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn inactive_user_cannot_log_in() {
    let app = TestApp::new();

    let (status, _) = app
        .request(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({
                "username": "former",
                "password": "secret123",
                "role": "cashier",
                "is_active": false
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app
        .request(
            Method::POST,
            "/auth/token",
            None,
            Some(json!({ "username": "former", "password": "secret123" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn short_password_fails_validation() {
    let app = TestApp::new();

    let (status, body) = app
        .request(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({ "username": "tiny", "password": "123", "role": "cook" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn missing_or_bad_token_is_unauthorized() {
    let app = TestApp::new();

    let (status, body) = app.request(Method::GET, "/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not authenticated");

    let (status, body) = app.get("/auth/me", "garbage").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Could not validate credentials");
}

#[tokio::test]
async fn banner_and_metrics_are_public() {
    let app = TestApp::new();

    let (status, body) = app.request(Method::GET, "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Café System API");

    app.register("someone", "cook").await;

    let (status, _) = app.request(Method::GET, "/metrics", None, None).await;
    assert_eq!(status, StatusCode::OK);
}
