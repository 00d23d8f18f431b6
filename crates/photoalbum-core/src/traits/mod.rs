//! Core traits defined in `photoalbum-core` and implemented by other crates.
//!
//! Collaborators that need domain entities (the credential store, avatar
//! storage) are declared next to the entities in the crates that own them.

pub mod notification;
pub mod session_tracker;
pub mod storage;

pub use notification::NotificationSink;
pub use session_tracker::SessionTracker;
pub use storage::StorageProvider;
