use crate::{CredentialSource, StorageCredentialSource};

use shell_storage::{AUTH_TOKEN_KEY, DurableStorage, MemoryStorage};

use std::sync::Arc;

#[test]
fn test_token_read_from_storage() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(AUTH_TOKEN_KEY, "abc").unwrap();

    let source = StorageCredentialSource::new(storage);

    assert_eq!(source.token().as_deref(), Some("abc"));
}

#[test]
fn test_token_reflects_later_writes() {
    let storage = Arc::new(MemoryStorage::new());
    let source = StorageCredentialSource::new(storage.clone());
    assert!(source.token().is_none());

    storage.set(AUTH_TOKEN_KEY, "late").unwrap();

    assert_eq!(source.token().as_deref(), Some("late"));
}

#[test]
fn test_empty_token_treated_as_absent() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(AUTH_TOKEN_KEY, "").unwrap();

    let source = StorageCredentialSource::new(storage);

    assert!(source.token().is_none());
}

#[test]
fn test_clear_removes_only_token() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(AUTH_TOKEN_KEY, "abc").unwrap();
    storage.set("auth-storage", "{}").unwrap();

    StorageCredentialSource::new(storage.clone()).clear();

    assert!(storage.get(AUTH_TOKEN_KEY).unwrap().is_none());
    assert!(storage.get("auth-storage").unwrap().is_some());
}
