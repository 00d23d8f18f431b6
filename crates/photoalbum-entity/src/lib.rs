//! # photoalbum-entity
//!
//! Domain entity models for the photo album. Every struct in this crate
//! represents either a stored record or a value object held in a user's
//! session. All entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`.

pub mod social;
pub mod user;
