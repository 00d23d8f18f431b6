//! Authentication workflow events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events raised by login, logout, and registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthEvent {
    /// A user logged in successfully.
    Authenticated {
        /// The user ID.
        user_id: Uuid,
        /// The login name.
        login: String,
    },
    /// A login attempt was rejected.
    LoginFailed {
        /// Message shown next to the login form.
        message: String,
    },
    /// The registration form should be shown.
    StartRegistration,
    /// A registration field failed validation.
    ValidationFailed {
        /// Form field the message belongs to.
        field: String,
        /// Message shown next to the field.
        message: String,
    },
    /// A general error message for the page.
    Error {
        /// Message shown to the user.
        message: String,
    },
}

impl AuthEvent {
    /// Whether this event reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::LoginFailed { .. } | Self::ValidationFailed { .. } | Self::Error { .. }
        )
    }
}
