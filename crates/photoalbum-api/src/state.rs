//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use axum::http::HeaderName;

use photoalbum_auth::credential::CredentialStore;
use photoalbum_core::config::AppConfig;
use photoalbum_core::traits::session_tracker::SessionTracker;
use photoalbum_core::traits::storage::StorageProvider;
use photoalbum_service::auth::Authenticator;

use crate::session::SessionRegistry;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Header carrying the session id
    pub session_header: HeaderName,

    /// Login, logout, and registration workflow
    pub authenticator: Arc<Authenticator>,
    /// Credential store behind the workflow
    pub credential_store: Arc<dyn CredentialStore>,
    /// Logged-in user tracker
    pub tracker: Arc<dyn SessionTracker>,
    /// Storage provider avatars are written to
    pub storage: Arc<dyn StorageProvider>,

    /// Live browser sessions
    pub sessions: Arc<SessionRegistry>,
}
