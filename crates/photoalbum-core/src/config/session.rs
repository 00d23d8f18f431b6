//! Session handling configuration.

use serde::{Deserialize, Serialize};

/// HTTP session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Header carrying the session identifier in both directions.
    #[serde(default = "default_header_name")]
    pub header_name: String,
    /// Idle timeout in minutes after which a session is dropped.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u64,
    /// Interval between idle-session sweeps in minutes.
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_minutes: u64,
    /// Upper bound on live sessions. New sessions are refused beyond it.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            header_name: default_header_name(),
            idle_timeout_minutes: default_idle_timeout(),
            cleanup_interval_minutes: default_cleanup_interval(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_header_name() -> String {
    "x-session-id".to_string()
}

fn default_idle_timeout() -> u64 {
    30
}

fn default_cleanup_interval() -> u64 {
    5
}

fn default_max_sessions() -> usize {
    10_000
}
