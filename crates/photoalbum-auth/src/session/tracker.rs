//! In-memory logged-in user tracker backed by a concurrent map.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};

use photoalbum_core::result::AppResult;
use photoalbum_core::traits::SessionTracker;
use photoalbum_core::types::{SessionId, UserId};

/// Maps every logged-in user to the one session allowed to act for them.
///
/// Suitable for single-node deployments only. Each map shard is locked
/// for the duration of an insert, which makes [`SessionTracker::replace`]
/// atomic per user.
#[derive(Debug, Clone, Default)]
pub struct LoggedUserTracker {
    sessions: Arc<DashMap<UserId, SessionId>>,
}

impl LoggedUserTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionTracker for LoggedUserTracker {
    async fn put(&self, user_id: UserId, session_id: SessionId) -> AppResult<()> {
        self.sessions.insert(user_id, session_id);
        debug!(user_id = %user_id, session_id = %session_id, "Session tracked");
        Ok(())
    }

    async fn remove(&self, user_id: UserId) -> AppResult<Option<SessionId>> {
        let removed = self.sessions.remove(&user_id).map(|(_, session)| session);
        if let Some(session_id) = removed {
            debug!(user_id = %user_id, session_id = %session_id, "Session untracked");
        }
        Ok(removed)
    }

    async fn remove_if_current(&self, user_id: UserId, session_id: SessionId) -> AppResult<bool> {
        let removed = self
            .sessions
            .remove_if(&user_id, |_, current| *current == session_id)
            .is_some();
        if removed {
            debug!(user_id = %user_id, session_id = %session_id, "Session untracked");
        }
        Ok(removed)
    }

    async fn replace(
        &self,
        user_id: UserId,
        session_id: SessionId,
    ) -> AppResult<Option<SessionId>> {
        let evicted = self.sessions.insert(user_id, session_id);
        if let Some(old) = evicted.filter(|old| *old != session_id) {
            info!(
                user_id = %user_id,
                evicted = %old,
                session_id = %session_id,
                "Previous session superseded by new login"
            );
        }
        Ok(evicted)
    }

    async fn session_of(&self, user_id: UserId) -> AppResult<Option<SessionId>> {
        Ok(self.sessions.get(&user_id).map(|entry| *entry.value()))
    }

    async fn active_count(&self) -> AppResult<usize> {
        Ok(self.sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_remove() {
        let tracker = LoggedUserTracker::new();
        let user = UserId::new();
        let session = SessionId::new();

        tracker.put(user, session).await.unwrap();
        assert_eq!(tracker.session_of(user).await.unwrap(), Some(session));
        assert!(tracker.is_current(user, session).await.unwrap());

        assert_eq!(tracker.remove(user).await.unwrap(), Some(session));
        assert_eq!(tracker.session_of(user).await.unwrap(), None);
        assert_eq!(tracker.remove(user).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_evicts_previous_session() {
        let tracker = LoggedUserTracker::new();
        let user = UserId::new();
        let first = SessionId::new();
        let second = SessionId::new();

        assert_eq!(tracker.replace(user, first).await.unwrap(), None);
        assert_eq!(tracker.replace(user, second).await.unwrap(), Some(first));
        assert!(!tracker.is_current(user, first).await.unwrap());
        assert!(tracker.is_current(user, second).await.unwrap());
        assert_eq!(tracker.active_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_remove_if_current_spares_newer_session() {
        let tracker = LoggedUserTracker::new();
        let user = UserId::new();
        let old = SessionId::new();
        let newer = SessionId::new();

        tracker.replace(user, old).await.unwrap();
        tracker.replace(user, newer).await.unwrap();

        assert!(!tracker.remove_if_current(user, old).await.unwrap());
        assert_eq!(tracker.session_of(user).await.unwrap(), Some(newer));

        assert!(tracker.remove_if_current(user, newer).await.unwrap());
        assert_eq!(tracker.session_of(user).await.unwrap(), None);
        assert!(!tracker.remove_if_current(user, newer).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_logins_leave_one_session() {
        let tracker = LoggedUserTracker::new();
        let user = UserId::new();
        let candidates: Vec<SessionId> = (0..64).map(|_| SessionId::new()).collect();

        let handles: Vec<_> = candidates
            .iter()
            .map(|session| {
                let tracker = tracker.clone();
                let session = *session;
                tokio::spawn(async move { tracker.replace(user, session).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(tracker.active_count().await.unwrap(), 1);
        let winner = tracker.session_of(user).await.unwrap().unwrap();
        assert!(candidates.contains(&winner));
    }
}
