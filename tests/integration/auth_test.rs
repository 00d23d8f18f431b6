//! Integration tests for the authentication flow.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TestApp, png};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;

    let (response, session) = app.login("bob", "secret").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.outcome(), "success");
    assert_eq!(response.auth_events(), vec!["Authenticated"]);

    let me = app.request("GET", "/api/auth/me", None, Some(&session)).await;
    assert_eq!(me.body["data"]["logged_in"], true);
    assert_eq!(me.body["data"]["user"]["login"], "bob");
    assert_eq!(me.body["data"]["roles"], json!(["admin"]));
    assert!(me.body["data"]["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;

    let (response, session) = app.login("bob", "wrong").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.outcome(), "failed");
    assert_eq!(response.auth_events(), vec!["LoginFailed"]);
    assert_eq!(
        response.body["data"]["notifications"][0]["payload"]["event"]["message"],
        "Invalid login or password"
    );

    let me = app.request("GET", "/api/auth/me", None, Some(&session)).await;
    assert_eq!(me.body["data"]["logged_in"], false);
    assert_eq!(me.body["data"]["login_failed"], true);
}

#[tokio::test]
async fn test_login_requires_username() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "", "password": "x" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_pre_defined_login_refused_when_restricted() {
    let app = TestApp::with_config(|config| config.auth.restrict_predefined_users = true).await;

    let (response, _) = app.login("demo", "demo").await;
    assert_eq!(response.outcome(), "failed");

    let (response, _) = app.login("bob", "secret").await;
    assert_eq!(response.outcome(), "success");
}

#[tokio::test]
async fn test_second_device_supersedes_first() {
    let app = TestApp::new().await;

    let (_, first) = app.login("bob", "secret").await;
    let (_, second) = app.login("bob", "secret").await;
    assert_ne!(first, second);

    let me = app.request("GET", "/api/auth/me", None, Some(&first)).await;
    assert_eq!(me.body["data"]["logged_in"], false);

    let me = app.request("GET", "/api/auth/me", None, Some(&second)).await;
    assert_eq!(me.body["data"]["logged_in"], true);

    let health = app.request("GET", "/api/health", None, None).await;
    assert_eq!(health.body["data"]["active_users"], 1);
}

#[tokio::test]
async fn test_logout() {
    let app = TestApp::new().await;
    let (_, session) = app.login("bob", "secret").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&session))
        .await;
    assert_eq!(response.outcome(), "loggedOut");

    let me = app.request("GET", "/api/auth/me", None, Some(&session)).await;
    assert_eq!(me.body["data"]["logged_in"], false);

    let health = app.request("GET", "/api/health", None, None).await;
    assert_eq!(health.body["data"]["active_users"], 0);
}

#[tokio::test]
async fn test_anonymous_logout() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/api/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.outcome(), "loggedOut");
    assert!(response.session.is_some());
}

#[tokio::test]
async fn test_register_and_auto_login() {
    let app = TestApp::new().await;

    let start = app
        .request("POST", "/api/auth/register/start", None, None)
        .await;
    assert_eq!(start.auth_events(), vec!["StartRegistration"]);
    let session = start.session.clone().unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "login": "alice",
                "email": "a@x.com",
                "password": "p1",
                "confirm_password": "p1",
                "pre_defined": true,
            })),
            Some(&session),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.outcome(), "registered");
    assert_eq!(response.auth_events(), vec!["Authenticated"]);

    let me = app.request("GET", "/api/auth/me", None, Some(&session)).await;
    assert_eq!(me.body["data"]["logged_in"], true);
    assert_eq!(me.body["data"]["user"]["login"], "alice");
    assert_eq!(me.body["data"]["user"]["pre_defined"], false);
    assert_eq!(me.body["data"]["user"]["has_avatar"], false);
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "login": "alice",
                "email": "a@x.com",
                "password": "p1",
                "confirm_password": "p2",
            })),
            None,
        )
        .await;

    assert_eq!(response.outcome(), "rejected");
    let event = &response.body["data"]["notifications"][0]["payload"]["event"];
    assert_eq!(event["type"], "ValidationFailed");
    assert_eq!(event["field"], "register:confirmPassword");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "login": "robert",
                "email": "bob@example.com",
                "password": "p1",
                "confirm_password": "p1",
            })),
            None,
        )
        .await;

    assert_eq!(response.outcome(), "rejected");
    assert_eq!(
        response.body["data"]["notifications"][0]["payload"]["event"]["field"],
        "register:email"
    );
}

#[tokio::test]
async fn test_register_invalid_email_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "login": "alice",
                "email": "not-an-email",
                "password": "p1",
                "confirm_password": "p1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_with_avatar() {
    let app = TestApp::new().await;

    let upload = app
        .request_bytes("/api/auth/register/avatar", png(200, 200), None)
        .await;
    assert_eq!(upload.status, StatusCode::OK);
    assert_eq!(upload.outcome(), "staged");
    let session = upload.session.clone().unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "login": "carol",
                "email": "carol@example.com",
                "password": "pw",
                "confirm_password": "pw",
            })),
            Some(&session),
        )
        .await;
    assert_eq!(response.outcome(), "registered");

    let me = app.request("GET", "/api/auth/me", None, Some(&session)).await;
    assert_eq!(me.body["data"]["user"]["has_avatar"], true);
    let user_id = me.body["data"]["user"]["id"].as_str().unwrap().to_string();

    let stored = std::path::Path::new(&app.state.config.storage.local_root)
        .join(format!("avatars/{user_id}/avatar.png"));
    assert!(stored.exists());
}

#[tokio::test]
async fn test_register_with_broken_avatar_creates_nothing() {
    let app = TestApp::new().await;

    let upload = app
        .request_bytes("/api/auth/register/avatar", b"not an image".to_vec(), None)
        .await;
    let session = upload.session.clone().unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "login": "dave",
                "email": "dave@example.com",
                "password": "pw",
                "confirm_password": "pw",
            })),
            Some(&session),
        )
        .await;

    assert_eq!(response.outcome(), "rejected");
    assert_eq!(
        response.body["data"]["notifications"][0]["payload"]["event"]["message"],
        "Error while saving avatar"
    );
    assert!(
        !app.state
            .credential_store
            .exists_by_login("dave")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_oversized_avatar_rejected() {
    let app = TestApp::with_config(|config| config.storage.max_avatar_bytes = 1024).await;

    let response = app
        .request_bytes("/api/auth/register/avatar", vec![0u8; 4096], None)
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_reset_credentials() {
    let app = TestApp::new().await;
    let (_, session) = app.login("bob", "wrong").await;

    let response = app
        .request("POST", "/api/auth/credentials/reset", None, Some(&session))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.outcome(), "reset");
    assert_eq!(response.notification_count(), 0);
}

#[tokio::test]
async fn test_start_conversation_once() {
    let app = TestApp::new().await;

    let first = app
        .request("POST", "/api/conversation/start", None, None)
        .await;
    assert_eq!(first.outcome(), "started");
    assert_eq!(first.notification_count(), 1);
    assert_eq!(
        first.body["data"]["notifications"][0]["payload"]["event"]["target"],
        "anonymous"
    );
    let session = first.session.clone().unwrap();

    let second = app
        .request("POST", "/api/conversation/start", None, Some(&session))
        .await;
    assert_eq!(second.outcome(), "alreadyStarted");
    assert_eq!(second.notification_count(), 0);
}

#[tokio::test]
async fn test_unknown_session_gets_new_id() {
    let app = TestApp::new().await;
    let unknown = "00000000-0000-0000-0000-000000000001";

    let response = app.request("GET", "/api/auth/me", None, Some(unknown)).await;

    let issued = response.session.expect("session header");
    assert_ne!(issued, unknown);

    let again = app.request("GET", "/api/auth/me", None, Some(&issued)).await;
    assert_eq!(again.session.as_deref(), Some(issued.as_str()));
}

#[tokio::test]
async fn test_full_session_registry_refuses_new_sessions() {
    let app = TestApp::with_config(|config| config.session.max_sessions = 1).await;

    let first = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(first.status, StatusCode::OK);
    let session = first.session.clone().unwrap();

    let refused = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(refused.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(app.state.sessions.len(), 1);

    let known = app.request("GET", "/api/auth/me", None, Some(&session)).await;
    assert_eq!(known.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["storage"], true);
}
