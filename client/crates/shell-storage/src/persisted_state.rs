use crate::{DurableStorage, StorageError, StorageResult};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const PERSISTED_STATE_VERSION: u32 = 0;

/// On-disk shape of a store snapshot: `{ "state": {...}, "version": 0 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState<T> {
    pub state: T,
    pub version: u32,
}

/// Reads and decodes the snapshot stored under `key`.
///
/// Returns `Ok(None)` when nothing is stored, `Corrupted` when the value does
/// not decode or carries an unknown version.
pub fn read_state<T: DeserializeOwned>(
    storage: &dyn DurableStorage,
    key: &str,
) -> StorageResult<Option<T>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    let persisted: PersistedState<T> =
        serde_json::from_str(&raw).map_err(|e| StorageError::corrupted(key, e.to_string()))?;

    if persisted.version != PERSISTED_STATE_VERSION {
        return Err(StorageError::corrupted(
            key,
            format!("unsupported snapshot version {}", persisted.version),
        ));
    }

    Ok(Some(persisted.state))
}

pub fn write_state<T: Serialize>(
    storage: &dyn DurableStorage,
    key: &str,
    state: &T,
) -> StorageResult<()> {
    let json = serde_json::to_string(&PersistedState {
        state,
        version: PERSISTED_STATE_VERSION,
    })?;
    storage.set(key, &json)
}
