//! Storage provider trait for pluggable byte storage backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for file storage backends.
///
/// The [`StorageProvider`] trait is defined here in `photoalbum-core` and
/// implemented in `photoalbum-storage`. Paths are relative to the
/// provider's root and always use `/` as separator.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write bytes to a file at the given path, replacing any existing file.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete a file at the given path. Deleting a missing file succeeds.
    async fn delete(&self, path: &str) -> AppResult<()>;
}
