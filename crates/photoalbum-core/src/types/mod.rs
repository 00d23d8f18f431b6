//! Core type definitions used across the photo album workspace.

pub mod id;

pub use id::*;
