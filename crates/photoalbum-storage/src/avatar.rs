//! Avatar storage for newly registered users.

use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use image::ImageFormat;

use photoalbum_core::config::StorageConfig;
use photoalbum_core::error::{AppError, ErrorKind};
use photoalbum_core::result::AppResult;
use photoalbum_core::traits::storage::StorageProvider;
use photoalbum_entity::user::User;

/// Persists avatar images uploaded during registration.
#[async_trait]
pub trait AvatarStorage: Send + Sync + std::fmt::Debug {
    /// Store `data` as the avatar of `user`. Returns the storage path.
    async fn save(&self, data: Bytes, user: &User) -> AppResult<String>;

    /// Remove the avatar of `user`, if one was stored.
    async fn delete(&self, user: &User) -> AppResult<()>;
}

/// Avatar storage that normalizes uploads to a square PNG.
#[derive(Debug, Clone)]
pub struct AvatarManager {
    /// Provider the processed images are written to.
    provider: Arc<dyn StorageProvider>,
    /// Bounding box edge in pixels.
    size: u32,
    /// Largest accepted upload.
    max_bytes: usize,
}

impl AvatarManager {
    /// Create an avatar manager from the storage configuration.
    pub fn new(provider: Arc<dyn StorageProvider>, config: &StorageConfig) -> Self {
        Self {
            provider,
            size: config.avatar_size,
            max_bytes: config.max_avatar_bytes,
        }
    }

    /// Storage path of the avatar belonging to `user`.
    pub fn avatar_path(user: &User) -> String {
        format!("avatars/{}/avatar.png", user.id)
    }

    /// Decode, shrink to fit the bounding box, and re-encode as PNG.
    fn normalize(data: &[u8], size: u32) -> AppResult<Bytes> {
        let decoded = image::load_from_memory(data).map_err(|e| {
            AppError::with_source(ErrorKind::Validation, "Avatar is not a readable image", e)
        })?;

        let resized = if decoded.width() > size || decoded.height() > size {
            decoded.thumbnail(size, size)
        } else {
            decoded
        };

        let mut out = Cursor::new(Vec::new());
        resized.write_to(&mut out, ImageFormat::Png).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to encode avatar", e)
        })?;
        Ok(Bytes::from(out.into_inner()))
    }
}

#[async_trait]
impl AvatarStorage for AvatarManager {
    async fn save(&self, data: Bytes, user: &User) -> AppResult<String> {
        if data.is_empty() {
            return Err(AppError::validation("Empty avatar upload"));
        }
        if data.len() > self.max_bytes {
            return Err(AppError::validation(format!(
                "Avatar exceeds {} bytes",
                self.max_bytes
            )));
        }

        let size = self.size;
        let png = tokio::task::spawn_blocking(move || Self::normalize(&data, size))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Avatar task panicked", e))??;

        let path = Self::avatar_path(user);
        self.provider.write(&path, png).await?;

        tracing::debug!(user_id = %user.id, path = %path, "Stored avatar");
        Ok(path)
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        let path = Self::avatar_path(user);
        self.provider.delete(&path).await?;
        tracing::debug!(user_id = %user.id, path = %path, "Removed avatar");
        Ok(())
    }
}
