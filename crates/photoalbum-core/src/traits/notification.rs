//! Sink for workflow notifications.

use crate::events::Notification;

/// Receives notifications raised by workflow operations.
///
/// The caller hands a sink to every workflow call and decides what to do
/// with the notifications afterwards (render, log, forward over HTTP).
pub trait NotificationSink: Send + Sync {
    /// Accept a single notification.
    fn emit(&self, notification: Notification);
}

/// Discards everything. Useful for internal calls nobody renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn emit(&self, notification: Notification) {
        tracing::trace!(id = %notification.id, "Notification discarded");
    }
}
