use crate::{DurableStorage, StorageResult, validate_key};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-process storage. Survives store re-creation but not process exit.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panic mid-insert leaves the map consistent, so poisoning is ignored.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DurableStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.entries().remove(key);
        Ok(())
    }
}
