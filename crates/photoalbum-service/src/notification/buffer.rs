//! In-memory notification sink drained once per request.

use std::sync::Mutex;

use tracing::trace;

use photoalbum_core::events::Notification;
use photoalbum_core::traits::notification::NotificationSink;

/// Collects notifications until the caller drains them.
#[derive(Debug, Default)]
pub struct NotificationBuffer {
    items: Mutex<Vec<Notification>>,
}

impl NotificationBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every buffered notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *items)
    }
}

impl NotificationSink for NotificationBuffer {
    fn emit(&self, notification: Notification) {
        trace!(id = %notification.id, "Buffered notification");
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}
