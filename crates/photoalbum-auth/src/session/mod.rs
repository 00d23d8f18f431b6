//! Tracking of which session each logged-in user owns.

pub mod tracker;

pub use tracker::LoggedUserTracker;
