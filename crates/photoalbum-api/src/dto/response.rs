//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use photoalbum_core::events::Notification;
use photoalbum_entity::social::SocialProfile;
use photoalbum_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Result of a workflow operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowResponse {
    /// Outcome token, e.g. `success`, `failed`, `loggedOut`.
    pub outcome: String,
    /// Notifications raised while handling the request.
    pub notifications: Vec<Notification>,
}

impl WorkflowResponse {
    /// Creates a workflow response.
    pub fn new(outcome: impl Into<String>, notifications: Vec<Notification>) -> Self {
        Self {
            outcome: outcome.into(),
            notifications,
        }
    }
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Login name.
    pub login: String,
    /// Email.
    pub email: String,
    /// Display name.
    pub display_name: String,
    /// Seeded demo account.
    pub pre_defined: bool,
    /// Has an uploaded avatar.
    pub has_avatar: bool,
    /// Registered at.
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into(),
            login: user.login.clone(),
            email: user.email.clone(),
            display_name: user.display_name(),
            pre_defined: user.pre_defined,
            has_avatar: user.has_avatar,
            created_at: user.created_at,
        }
    }
}

/// State of the calling session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Whether the session is logged in.
    pub logged_in: bool,
    /// The current user, when logged in.
    pub user: Option<UserResponse>,
    /// Granted role names.
    pub roles: Vec<String>,
    /// The last login attempt failed.
    pub login_failed: bool,
    /// The conversation has been started.
    pub conversation_started: bool,
}

/// Social profile summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialProfileResponse {
    /// Whether a profile has been imported.
    pub loaded: bool,
    /// Profile id, `"1"` when unknown.
    pub user_id: String,
    /// Comma-joined album ids.
    pub album_ids: String,
}

impl From<&SocialProfile> for SocialProfileResponse {
    fn from(profile: &SocialProfile) -> Self {
        Self {
            loaded: profile.is_loaded(),
            user_id: profile.user_id(),
            album_ids: profile.album_id_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Storage provider reachable.
    pub storage: bool,
    /// Live browser sessions.
    pub sessions: usize,
    /// Logged-in users.
    pub active_users: usize,
}
