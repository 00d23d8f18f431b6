//! # photoalbum-core
//!
//! Core crate for the photo album. Contains configuration schemas,
//! typed identifiers, workflow notifications, the collaborator traits
//! that do not depend on domain entities, and the unified error system.
//!
//! This crate has **no** internal dependencies on other photo album crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
