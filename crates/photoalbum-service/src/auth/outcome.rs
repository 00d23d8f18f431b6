//! Typed results of workflow operations.

use serde::Serialize;
use thiserror::Error;

/// Everything that can go wrong inside the workflow.
///
/// Failures are recovered where they happen and reported to the user as
/// notifications. The `Display` text is the message shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthFailure {
    /// Unknown login, wrong password, or a refused account.
    #[error("Invalid login or password")]
    InvalidCredentials,
    /// The login name is taken.
    #[error("Login is already taken")]
    DuplicateLogin,
    /// The email address is registered to another user.
    #[error("Email is already registered")]
    DuplicateEmail,
    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// The uploaded avatar could not be stored.
    #[error("Error while saving avatar")]
    AvatarStorageFailure,
    /// The credential store failed during registration.
    #[error("Error while registration")]
    RegistrationBackendFailure,
    /// Registration succeeded but the automatic login did not.
    #[error("Error while login")]
    AutoLoginFailure,
}

impl AuthFailure {
    /// Form field a validation failure is reported against.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::PasswordMismatch => Some("register:confirmPassword"),
            Self::DuplicateLogin => Some("register:loginName"),
            Self::DuplicateEmail => Some("register:email"),
            _ => None,
        }
    }
}

/// Result of [`Authenticator::authenticate`](super::Authenticator::authenticate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The session is now logged in.
    Success,
    /// The login was refused.
    Failure(AuthFailure),
}

impl LoginOutcome {
    /// Whether the login succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Outcome token for the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure(_) => "failed",
        }
    }
}

/// Result of [`Authenticator::register`](super::Authenticator::register).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The user was created. `auto_login` reports whether the follow-up
    /// login succeeded.
    Registered { auto_login: bool },
    /// Nothing was created.
    Rejected(AuthFailure),
}

impl RegistrationOutcome {
    /// Whether a user record was created.
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }

    /// The failure to report, including the non-fatal auto-login one.
    pub fn failure(&self) -> Option<AuthFailure> {
        match self {
            Self::Registered { auto_login: true } => None,
            Self::Registered { auto_login: false } => Some(AuthFailure::AutoLoginFailure),
            Self::Rejected(failure) => Some(*failure),
        }
    }

    /// Outcome token for the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registered { .. } => "registered",
            Self::Rejected(_) => "rejected",
        }
    }
}

/// Result of [`Authenticator::start_conversation`](super::Authenticator::start_conversation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationOutcome {
    /// The conversation was started now.
    Started,
    /// It had already been started; nothing was emitted.
    AlreadyStarted,
}

impl ConversationOutcome {
    /// Outcome token for the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::AlreadyStarted => "alreadyStarted",
        }
    }
}
