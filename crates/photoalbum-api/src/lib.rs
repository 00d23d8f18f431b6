//! # photoalbum-api
//!
//! HTTP API layer for the photo album built on Axum.
//!
//! Exposes the authentication workflow and the social profile holder as
//! JSON endpoints. Browser sessions are kept in a [`SessionRegistry`]
//! and identified by a request header.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use session::SessionRegistry;
pub use state::AppState;
