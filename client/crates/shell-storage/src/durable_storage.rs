use crate::{StorageError, StorageResult};

/// String-valued key-value area that survives process restarts.
///
/// Implementations must make each `set` visible to a later `get` in full or
/// not at all.
pub trait DurableStorage: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Keys double as file names, so only `[A-Za-z0-9_-]` is accepted.
#[track_caller]
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StorageError::invalid_key(key))
    }
}
