//! Credential store contract and implementations.

pub mod memory;
pub mod store;

pub use memory::MemoryCredentialStore;
pub use store::CredentialStore;
