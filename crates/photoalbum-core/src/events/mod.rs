//! Notifications emitted by the authentication workflow.
//!
//! Workflow operations never render anything themselves. They push
//! [`Notification`] values into a [`NotificationSink`](crate::traits::NotificationSink)
//! supplied by the caller, and the presentation layer decides how to show them.

pub mod auth;
pub mod navigation;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use auth::AuthEvent;
pub use navigation::{NavTarget, NavigationEvent};

/// Wrapper for all notifications with metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification ID.
    pub id: Uuid,
    /// When the notification was raised.
    pub timestamp: DateTime<Utc>,
    /// The notification payload.
    pub payload: NotificationPayload,
}

/// Union of all notification types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum NotificationPayload {
    /// Login, logout, and registration feedback.
    Auth(AuthEvent),
    /// A request to change the main area of the page.
    Navigation(NavigationEvent),
}

impl Notification {
    /// Create a new notification.
    pub fn new(payload: NotificationPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Returns the auth event, if this is one.
    pub fn as_auth(&self) -> Option<&AuthEvent> {
        match &self.payload {
            NotificationPayload::Auth(event) => Some(event),
            NotificationPayload::Navigation(_) => None,
        }
    }

    /// Whether the notification reports an error to the user.
    pub fn is_error(&self) -> bool {
        self.as_auth().is_some_and(AuthEvent::is_error)
    }
}

impl From<AuthEvent> for Notification {
    fn from(event: AuthEvent) -> Self {
        Self::new(NotificationPayload::Auth(event))
    }
}

impl From<NavigationEvent> for Notification {
    fn from(event: NavigationEvent) -> Self {
        Self::new(NotificationPayload::Navigation(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_domain_tag() {
        let notification = Notification::from(AuthEvent::StartRegistration);
        let json = serde_json::to_value(&notification).expect("serialize");
        assert_eq!(json["payload"]["domain"], "Auth");
        assert_eq!(json["payload"]["event"]["type"], "StartRegistration");
    }

    #[test]
    fn test_error_classification() {
        let failed = Notification::from(AuthEvent::LoginFailed {
            message: "Invalid login or password".to_string(),
        });
        assert!(failed.is_error());

        let nav = Notification::from(NavigationEvent::UpdateMainArea {
            target: NavTarget::Anonymous,
        });
        assert!(!nav.is_error());
    }
}
