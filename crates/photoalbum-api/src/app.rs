//! Application builder: wires collaborators, state, and the router, and
//! runs the server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use photoalbum_auth::credential::{CredentialStore, MemoryCredentialStore};
use photoalbum_auth::password::PasswordHasher;
use photoalbum_auth::policy::PreDefinedUserPolicy;
use photoalbum_auth::session::LoggedUserTracker;
use photoalbum_core::config::AppConfig;
use photoalbum_core::error::{AppError, ErrorKind};
use photoalbum_core::result::AppResult;
use photoalbum_core::traits::notification::NullSink;
use photoalbum_core::traits::session_tracker::SessionTracker;
use photoalbum_core::traits::storage::StorageProvider;
use photoalbum_service::auth::Authenticator;
use photoalbum_service::context::WorkflowContext;
use photoalbum_storage::avatar::AvatarManager;
use photoalbum_storage::providers::local::LocalStorageProvider;

use crate::router::build_router;
use crate::session::SessionRegistry;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Wires every collaborator from configuration.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    let session_header = HeaderName::from_bytes(config.session.header_name.as_bytes())
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid session header name: {}", config.session.header_name),
                e,
            )
        })?;

    tokio::fs::create_dir_all(&config.storage.data_root)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create data root '{}'", config.storage.data_root),
                e,
            )
        })?;

    let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
    let credential_store: Arc<dyn CredentialStore> = Arc::new(
        MemoryCredentialStore::with_demo_users(&config.auth.demo_users, &hasher)?,
    );
    let tracker: Arc<dyn SessionTracker> = Arc::new(LoggedUserTracker::new());

    let storage: Arc<dyn StorageProvider> =
        Arc::new(LocalStorageProvider::new(&config.storage.local_root).await?);
    let avatars = Arc::new(AvatarManager::new(Arc::clone(&storage), &config.storage));

    let policy = Arc::new(PreDefinedUserPolicy::from_config(&config.auth));
    if config.auth.restrict_predefined_users {
        info!("Pre-defined demo accounts are refused on this deployment");
    }

    let authenticator = Authenticator::new(
        Arc::clone(&credential_store),
        Arc::clone(&tracker),
        policy,
        hasher,
        &config.auth,
    )
    .with_avatar_storage(avatars);
    let sessions = Arc::new(SessionRegistry::new(config.session.max_sessions));

    Ok(AppState {
        config: Arc::new(config),
        session_header,
        authenticator: Arc::new(authenticator),
        credential_store,
        tracker,
        storage,
        sessions,
    })
}

/// Logs out and drops every session idle past the configured timeout.
///
/// Returns the number of sessions dropped.
pub async fn expire_idle_sessions(state: &AppState) -> usize {
    let timeout =
        chrono::Duration::minutes(state.config.session.idle_timeout_minutes as i64);
    let idle = state.sessions.idle_sessions(timeout);

    for id in &idle {
        if let Some(entry) = state.sessions.remove(*id) {
            let mut guard = entry.lock().await;
            let entry = &mut *guard;
            let mut ctx = WorkflowContext::new(&mut entry.session, &mut entry.conversation, &NullSink);
            state.authenticator.logout(&mut ctx).await;
            debug!(session_id = %id, "Expired idle session");
        }
    }

    if !idle.is_empty() {
        info!(count = idle.len(), "Expired idle sessions");
    }
    idle.len()
}

/// Runs the photo album server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting photo album server...");

    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = build_state(config).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = spawn_session_sweeper(state.clone(), shutdown_rx);

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!(address = %addr, "Photo album server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    if tokio::time::timeout(grace, sweeper).await.is_err() {
        warn!("Session sweeper did not stop within the shutdown grace period");
    }

    info!("Photo album server stopped");
    Ok(())
}

fn spawn_session_sweeper(state: AppState, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
    let minutes = state.config.session.cleanup_interval_minutes.max(1);
    let period = Duration::from_secs(minutes * 60);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    expire_idle_sessions(&state).await;
                }
                _ = shutdown.changed() => {
                    debug!("Session sweeper stopping");
                    break;
                }
            }
        }
    })
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received, starting graceful shutdown...");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &tempfile::TempDir) -> AppConfig {
        let mut config = AppConfig::default();
        config.storage.data_root = dir.path().to_string_lossy().into_owned();
        config.storage.local_root = dir.path().join("storage").to_string_lossy().into_owned();
        config
    }

    #[tokio::test]
    async fn test_build_state_rejects_bad_header() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(&dir);
        config.session.header_name = "not a header".into();
        let err = build_state(config).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn test_expire_idle_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let state = build_state(config(&dir)).await.unwrap();

        let (stale, entry, _) = state.sessions.get_or_create(None).unwrap();
        let (_fresh, _, _) = state.sessions.get_or_create(None).unwrap();
        entry.lock().await.session.last_seen = chrono::Utc::now() - chrono::Duration::hours(2);

        assert_eq!(expire_idle_sessions(&state).await, 1);
        assert_eq!(state.sessions.len(), 1);
        let (_, _, created) = state.sessions.get_or_create(Some(stale)).unwrap();
        assert!(created);
    }
}
