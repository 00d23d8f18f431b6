//! Login, logout, and registration workflow.

pub mod authenticator;
pub mod outcome;

pub use authenticator::Authenticator;
pub use outcome::{AuthFailure, ConversationOutcome, LoginOutcome, RegistrationOutcome};
