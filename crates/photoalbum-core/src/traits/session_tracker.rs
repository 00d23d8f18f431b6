//! Tracker mapping each logged-in user to its single active session.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{SessionId, UserId};

/// Process-wide registry of which session currently belongs to each user.
///
/// Implementations must be thread-safe: the tracker is shared by every
/// concurrently running request. A user id never maps to more than one
/// session id.
#[async_trait]
pub trait SessionTracker: Send + Sync + std::fmt::Debug {
    /// Records `session_id` as the active session of `user_id`,
    /// overwriting any previous entry.
    async fn put(&self, user_id: UserId, session_id: SessionId) -> AppResult<()>;

    /// Forgets the session of `user_id`. Returns the removed session, if any.
    async fn remove(&self, user_id: UserId) -> AppResult<Option<SessionId>>;

    /// Forgets the session of `user_id` only while it is still
    /// `session_id`, checked and removed as one atomic step. Returns whether
    /// an entry was removed.
    async fn remove_if_current(&self, user_id: UserId, session_id: SessionId) -> AppResult<bool>;

    /// Evicts any existing session for `user_id` and registers `session_id`
    /// as one atomic step. Returns the evicted session, if any.
    async fn replace(&self, user_id: UserId, session_id: SessionId)
    -> AppResult<Option<SessionId>>;

    /// The active session of `user_id`, if any.
    async fn session_of(&self, user_id: UserId) -> AppResult<Option<SessionId>>;

    /// Whether `session_id` is still the active session of `user_id`.
    async fn is_current(&self, user_id: UserId, session_id: SessionId) -> AppResult<bool> {
        Ok(self.session_of(user_id).await? == Some(session_id))
    }

    /// Number of users with an active session.
    async fn active_count(&self) -> AppResult<usize>;
}
