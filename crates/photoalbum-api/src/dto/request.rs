//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Album id update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumIdsRequest {
    /// Comma-joined album ids.
    pub ids: String,
}
