//! Storage configuration.

use serde::{Deserialize, Serialize};

/// Avatar and file storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all runtime data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Root path for the local storage provider.
    #[serde(default = "default_local_root")]
    pub local_root: String,
    /// Avatars are scaled to fit a square of this many pixels.
    #[serde(default = "default_avatar_size")]
    pub avatar_size: u32,
    /// Largest accepted avatar upload in bytes (default 2 MB).
    #[serde(default = "default_max_avatar_bytes")]
    pub max_avatar_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            local_root: default_local_root(),
            avatar_size: default_avatar_size(),
            max_avatar_bytes: default_max_avatar_bytes(),
        }
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_local_root() -> String {
    "./data/storage".to_string()
}

fn default_avatar_size() -> u32 {
    80
}

fn default_max_avatar_bytes() -> usize {
    2_097_152 // 2 MB
}
