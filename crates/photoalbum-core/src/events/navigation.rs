//! Navigation events for the presentation layer.

use serde::{Deserialize, Serialize};

/// Areas of the application the main view can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    /// The public landing page shown to anonymous visitors.
    Anonymous,
}

/// Events that move the user between views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NavigationEvent {
    /// Replace the main area with the given view.
    UpdateMainArea {
        /// The view to show.
        target: NavTarget,
    },
}
