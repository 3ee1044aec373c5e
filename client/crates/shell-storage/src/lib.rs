//! Durable key-value storage shared by the session and profile stores.
//!
//! Values are plain strings. Store snapshots are wrapped in a
//! [`PersistedState`] envelope before being written.

mod durable_storage;
mod error;
mod file_storage;
mod memory_storage;
mod persisted_state;

pub use durable_storage::{DurableStorage, validate_key};
pub use error::{Result as StorageResult, StorageError};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use persisted_state::{PERSISTED_STATE_VERSION, PersistedState, read_state, write_state};

/// Raw bearer token read by the credential transport
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Session snapshot: identity and token
pub const AUTH_STORAGE_KEY: &str = "auth-storage";
/// Profile store snapshot: profile and preferences
pub const USER_STORAGE_KEY: &str = "user-storage";

#[cfg(test)]
mod tests;
