//! # photoalbum-service
//!
//! The authentication workflow of the photo album. [`Authenticator`]
//! orchestrates the credential store, the logged-in user tracker, and
//! avatar storage to implement login, logout, and registration.
//!
//! The workflow holds no per-user state of its own. Every call receives a
//! [`WorkflowContext`] carrying the caller's session, the current
//! conversation, and the sink notifications are emitted into.

pub mod auth;
pub mod context;
pub mod notification;

pub use auth::{
    AuthFailure, Authenticator, ConversationOutcome, LoginOutcome, RegistrationOutcome,
};
pub use context::{Conversation, UserSession, WorkflowContext};
pub use notification::NotificationBuffer;
