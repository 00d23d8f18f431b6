//! Notification sinks used by the host application.

pub mod buffer;

pub use buffer::NotificationBuffer;
