//! # photoalbum-storage
//!
//! Storage for user-supplied files. Provides the local filesystem
//! [`StorageProvider`](photoalbum_core::traits::StorageProvider) and the
//! avatar storage the registration workflow saves uploads through.

pub mod avatar;
pub mod providers;

pub use avatar::{AvatarManager, AvatarStorage};
pub use providers::local::LocalStorageProvider;
