//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use photoalbum_api::{AppState, build_app, build_state};
use photoalbum_core::config::{AppConfig, DemoUserConfig};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for inspecting collaborators directly
    pub state: AppState,
    /// Keeps the storage directory alive for the test
    _dir: TempDir,
}

/// Response captured from the router
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty)
    pub body: Value,
    /// Session id echoed back by the server
    pub session: Option<String>,
}

impl TestResponse {
    /// The workflow outcome token.
    pub fn outcome(&self) -> &str {
        self.body["data"]["outcome"].as_str().unwrap_or_default()
    }

    /// The `type` of every auth notification, in order.
    pub fn auth_events(&self) -> Vec<String> {
        self.body["data"]["notifications"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter(|n| n["payload"]["domain"] == "Auth")
                    .filter_map(|n| n["payload"]["event"]["type"].as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of notifications in the response.
    pub fn notification_count(&self) -> usize {
        self.body["data"]["notifications"]
            .as_array()
            .map(Vec::len)
            .unwrap_or(0)
    }
}

impl TestApp {
    /// Create a test application with default configuration
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test application after adjusting the configuration
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.storage.data_root = dir.path().to_string_lossy().into_owned();
        config.storage.local_root = dir.path().join("storage").to_string_lossy().into_owned();
        config.auth.password_salt = "integration-test-salt".to_string();
        config.auth.demo_users = vec![
            DemoUserConfig {
                login: "bob".into(),
                password: "secret".into(),
                email: "bob@example.com".into(),
                pre_defined: false,
            },
            DemoUserConfig {
                login: "demo".into(),
                password: "demo".into(),
                email: "demo@example.com".into(),
                pre_defined: true,
            },
        ];
        adjust(&mut config);

        let state = build_state(config).await.expect("Failed to build state");
        let router = build_app(state.clone());

        Self {
            router,
            state,
            _dir: dir,
        }
    }

    /// Make a JSON request
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        session: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(session) = session {
            builder = builder.header("x-session-id", session);
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Make a request with a raw byte body
    pub async fn request_bytes(
        &self,
        path: &str,
        bytes: Vec<u8>,
        session: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/octet-stream");
        if let Some(session) = session {
            builder = builder.header("x-session-id", session);
        }
        self.send(builder.body(Body::from(bytes)).unwrap()).await
    }

    /// Log in on a fresh session and return its id
    pub async fn login(&self, username: &str, password: &str) -> (TestResponse, String) {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;
        let session = response.session.clone().expect("session header");
        (response, session)
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let session = response
            .headers()
            .get("x-session-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            body,
            session,
        }
    }
}

/// A small solid-color PNG.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([20, 120, 200]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}
