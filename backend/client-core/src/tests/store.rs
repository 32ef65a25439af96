use crate::error::cache::CacheError;
use crate::reference_cache::{FileStore, KeyValueStore, MemoryStore};

use tempfile::TempDir;

/// **VALUE**: Verifies the file store persists values across store instances.
///
/// **WHY THIS MATTERS**: The reference lists must survive restarts; that is the whole
/// point of caching them.
///
/// **BUG THIS CATCHES**: Would catch writes that only land in the temp file.
#[test]
fn given_value_set_when_read_by_new_store_then_value_returned() {
    // GIVEN: A value written through one store
    let dir = TempDir::new().unwrap();
    FileStore::new(dir.path()).set("centuries", "[]").unwrap();

    // WHEN: Reading through a fresh store on the same directory
    let value = FileStore::new(dir.path()).get("centuries").unwrap();

    // THEN: Same text, no temp file left behind
    assert_eq!(value.as_deref(), Some("[]"));
    assert!(!dir.path().join("centuries.json.tmp").exists());
    assert!(dir.path().join("centuries.json").exists());
}

/// **VALUE**: A missing key is `None`, not an error.
#[test]
fn given_empty_dir_when_get_then_none() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("not-yet-created"));

    assert_eq!(store.get("classification").unwrap(), None);
}

/// **VALUE**: Keys cannot escape the cache directory.
///
/// **BUG THIS CATCHES**: Would catch a key like "../config" writing outside the store.
#[test]
fn given_path_like_key_when_set_then_invalid_key_error() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let result = store.set("../config", "x");

    assert!(matches!(result, Err(CacheError::InvalidKey { .. })));
}

/// **VALUE**: Removing is idempotent so clearing an empty cache succeeds.
#[test]
fn given_stored_value_when_removed_twice_then_both_succeed() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    store.set("centuries", "[]").unwrap();

    store.remove("centuries").unwrap();
    store.remove("centuries").unwrap();

    assert_eq!(store.get("centuries").unwrap(), None);
}

/// **VALUE**: The in-memory store honours the same contract.
#[test]
fn given_memory_store_when_set_get_remove_then_behaves_like_map() {
    let store = MemoryStore::new();

    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}
