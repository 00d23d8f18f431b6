//! Registry of live browser sessions.

use std::sync::Arc;

use chrono::{Duration, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use photoalbum_core::error::AppError;
use photoalbum_core::result::AppResult;
use photoalbum_core::types::SessionId;
use photoalbum_service::context::{Conversation, UserSession};

/// Session state plus the conversation it is currently in.
#[derive(Debug)]
pub struct SessionEntry {
    /// The session.
    pub session: UserSession,
    /// The active conversation.
    pub conversation: Conversation,
}

impl SessionEntry {
    fn new(id: SessionId) -> Self {
        Self {
            session: UserSession::new(id),
            conversation: Conversation::default(),
        }
    }
}

/// Shared handle to one session. The mutex serializes requests of the
/// same session.
pub type SharedSession = Arc<Mutex<SessionEntry>>;

/// All live sessions keyed by id.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, SharedSession>,
    /// Soft limit: concurrent creations may overshoot it slightly.
    max_sessions: usize,
}

impl SessionRegistry {
    /// Creates an empty registry holding at most `max_sessions` sessions.
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            max_sessions,
        }
    }

    /// Returns the session for `id`, or a new one when `id` is absent or
    /// unknown. The flag is `true` when the session was just created.
    ///
    /// Fails with `ServiceUnavailable` when a new session is needed but the
    /// registry is full. Known sessions are always returned.
    pub fn get_or_create(
        &self,
        id: Option<SessionId>,
    ) -> AppResult<(SessionId, SharedSession, bool)> {
        if let Some(id) = id {
            if let Some(entry) = self.sessions.get(&id) {
                return Ok((id, Arc::clone(entry.value()), false));
            }
        }

        if self.sessions.len() >= self.max_sessions {
            warn!(limit = self.max_sessions, "Session registry full, refusing new session");
            return Err(AppError::service_unavailable("Too many active sessions"));
        }

        let id = SessionId::new();
        let entry = Arc::new(Mutex::new(SessionEntry::new(id)));
        self.sessions.insert(id, Arc::clone(&entry));
        debug!(session_id = %id, "Created session");
        Ok((id, entry, true))
    }

    /// Drops a session.
    pub fn remove(&self, id: SessionId) -> Option<SharedSession> {
        self.sessions.remove(&id).map(|(_, entry)| entry)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Ids of sessions idle for longer than `timeout`.
    ///
    /// Sessions busy with a request are never idle.
    pub fn idle_sessions(&self, timeout: Duration) -> Vec<SessionId> {
        let now = Utc::now();
        self.sessions
            .iter()
            .filter(|entry| {
                entry
                    .value()
                    .try_lock()
                    .map(|guard| guard.session.is_idle(now, timeout))
                    .unwrap_or(false)
            })
            .map(|entry| *entry.key())
            .collect()
    }
}
