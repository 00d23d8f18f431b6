//! Route definitions for the photo album HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_avatar = state.config.storage.max_avatar_bytes;

    let api_routes = Router::new()
        .merge(auth_routes(max_avatar))
        .merge(conversation_routes())
        .merge(social_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors, &state.session_header);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Login, logout, and registration
fn auth_routes(max_avatar: usize) -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route(
            "/auth/credentials/reset",
            post(handlers::auth::reset_credentials),
        )
        .route(
            "/auth/register/start",
            post(handlers::auth::start_registration),
        )
        .route(
            "/auth/register/avatar",
            post(handlers::auth::upload_avatar).layer(DefaultBodyLimit::max(max_avatar)),
        )
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/me", get(handlers::auth::me))
}

/// Conversation lifecycle
fn conversation_routes() -> Router<AppState> {
    Router::new().route("/conversation/start", post(handlers::conversation::start))
}

/// Imported social profile
fn social_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/social/profile",
            get(handlers::social::get_profile).put(handlers::social::put_profile),
        )
        .route("/social/albums", axum::routing::put(handlers::social::put_albums))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
