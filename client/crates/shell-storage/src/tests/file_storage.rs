use crate::{AUTH_TOKEN_KEY, DurableStorage, FileStorage};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use tempfile::TempDir;

#[test]
fn given_new_directory_when_open_then_created() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("storage");

    let storage = FileStorage::open(&dir).unwrap();

    assert!(dir.is_dir());
    assert_that!(storage.dir(), eq(dir.as_path()));
}

#[test]
fn given_value_set_when_reopened_then_value_survives() {
    let temp = TempDir::new().unwrap();

    FileStorage::open(temp.path())
        .unwrap()
        .set(AUTH_TOKEN_KEY, "mock_token_1_42")
        .unwrap();

    let reopened = FileStorage::open(temp.path()).unwrap();
    assert_that!(reopened.get(AUTH_TOKEN_KEY), ok(some(eq("mock_token_1_42"))));
}

#[test]
fn given_value_set_when_written_then_no_temp_files_remain() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::open(temp.path()).unwrap();

    storage.set("auth-storage", "{}").unwrap();
    storage.set("auth-storage", "{\"v\":2}").unwrap();

    let names: Vec<String> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_that!(names, eq(&vec!["auth-storage".to_string()]));
}

#[test]
fn given_value_when_removed_then_get_returns_none() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::open(temp.path()).unwrap();
    storage.set(AUTH_TOKEN_KEY, "abc").unwrap();

    storage.remove(AUTH_TOKEN_KEY).unwrap();

    assert_that!(storage.get(AUTH_TOKEN_KEY), ok(none()));
    assert_that!(storage.remove(AUTH_TOKEN_KEY), ok(anything()));
}

#[test]
fn given_invalid_key_when_get_then_error() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::open(temp.path()).unwrap();

    assert_that!(storage.get("a/b"), err(anything()));
    assert_that!(storage.get(""), err(anything()));
}
