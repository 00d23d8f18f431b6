//! # photoalbum-auth
//!
//! Building blocks the authentication workflow is assembled from.
//!
//! ## Modules
//!
//! - `credential` — credential store contract and the in-memory store
//! - `identity` — per-session identity and submitted credentials
//! - `password` — salted Argon2 password hashing
//! - `policy` — login policies such as the pre-defined account guard
//! - `session` — the process-wide logged-in user tracker

pub mod credential;
pub mod identity;
pub mod password;
pub mod policy;
pub mod session;

pub use credential::{CredentialStore, MemoryCredentialStore};
pub use identity::{Credentials, Identity, Role};
pub use password::PasswordHasher;
pub use policy::{LoginPolicy, PreDefinedUserPolicy};
pub use session::LoggedUserTracker;
