//! Per-session and per-conversation state handed to the workflow.

use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};

use photoalbum_auth::identity::{Credentials, Identity};
use photoalbum_core::events::Notification;
use photoalbum_core::traits::notification::NotificationSink;
use photoalbum_core::types::SessionId;
use photoalbum_entity::social::SocialProfile;
use photoalbum_entity::user::User;

/// Everything the application remembers about one browser session.
///
/// Owned by the host's session layer. The workflow only mutates it
/// through a [`WorkflowContext`].
#[derive(Debug, Clone)]
pub struct UserSession {
    /// The session's id, also used as the tracker value.
    pub id: SessionId,
    /// Username and password waiting to be authenticated.
    pub credentials: Credentials,
    /// Who the session is logged in as.
    pub identity: Identity,
    /// The current user. Empty while anonymous.
    pub user: User,
    /// Imported social profile.
    pub social: SocialProfile,
    /// Last time a request touched this session.
    pub last_seen: DateTime<Utc>,
}

impl UserSession {
    /// Creates an anonymous session.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            credentials: Credentials::default(),
            identity: Identity::default(),
            user: User::default(),
            social: SocialProfile::default(),
            last_seen: Utc::now(),
        }
    }

    /// Records activity on the session.
    pub fn touch(&mut self) {
        self.last_seen = Utc::now();
    }

    /// Whether the session has been idle for longer than `timeout`.
    pub fn is_idle(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        now - self.last_seen > timeout
    }
}

/// State of one multi-request interaction, such as a registration.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    /// The last login attempt failed.
    pub login_failed: bool,
    /// `start_conversation` already ran.
    pub conversation_started: bool,
    /// Avatar uploaded for the registration in progress.
    pub pending_avatar: Option<Bytes>,
}

/// Borrowed state a single workflow call operates on.
pub struct WorkflowContext<'a> {
    /// The caller's session.
    pub session: &'a mut UserSession,
    /// The conversation the call belongs to.
    pub conversation: &'a mut Conversation,
    sink: &'a dyn NotificationSink,
}

impl<'a> WorkflowContext<'a> {
    /// Bundles a session, its conversation, and the sink to report into.
    pub fn new(
        session: &'a mut UserSession,
        conversation: &'a mut Conversation,
        sink: &'a dyn NotificationSink,
    ) -> Self {
        Self {
            session,
            conversation,
            sink,
        }
    }

    /// Emits a notification for the presentation layer.
    pub fn emit(&self, notification: impl Into<Notification>) {
        self.sink.emit(notification.into());
    }
}

impl std::fmt::Debug for WorkflowContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowContext")
            .field("session", &self.session.id)
            .field("conversation", &self.conversation)
            .finish()
    }
}
