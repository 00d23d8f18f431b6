//! Integration tests for the social profile endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_default_profile() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/social/profile", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["loaded"], false);
    assert_eq!(response.body["data"]["user_id"], "1");
    assert_eq!(response.body["data"]["album_ids"], "");
}

#[tokio::test]
async fn test_imported_profile_id() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/api/social/profile",
            Some(json!({ "id": "42", "name": "Alice" })),
            None,
        )
        .await;
    assert_eq!(response.body["data"]["loaded"], true);
    assert_eq!(response.body["data"]["user_id"], "42");

    let session = response.session.unwrap();
    let again = app
        .request("GET", "/api/social/profile", None, Some(&session))
        .await;
    assert_eq!(again.body["data"]["user_id"], "42");
}

#[tokio::test]
async fn test_album_ids_round_trip() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/api/social/albums",
            Some(json!({ "ids": "a,b,c" })),
            None,
        )
        .await;
    assert_eq!(response.body["data"]["album_ids"], "a,b,c");

    let session = response.session.unwrap();
    let cleared = app
        .request(
            "PUT",
            "/api/social/albums",
            Some(json!({ "ids": "" })),
            Some(&session),
        )
        .await;
    assert_eq!(cleared.body["data"]["album_ids"], "");
}

#[tokio::test]
async fn test_logout_clears_profile() {
    let app = TestApp::new().await;
    let (_, session) = app.login("bob", "secret").await;

    app.request(
        "PUT",
        "/api/social/profile",
        Some(json!({ "id": 7 })),
        Some(&session),
    )
    .await;
    app.request("POST", "/api/auth/logout", None, Some(&session))
        .await;

    let profile = app
        .request("GET", "/api/social/profile", None, Some(&session))
        .await;
    assert_eq!(profile.body["data"]["loaded"], false);
    assert_eq!(profile.body["data"]["user_id"], "1");
}
