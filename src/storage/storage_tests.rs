use crate::storage::{FileStorage, MemoryStorage, StorageBackendTrait};
use std::fs;

#[test]
fn memory_storage_returns_none_for_missing_key() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("missing").unwrap(), None);
}

#[test]
fn memory_storage_roundtrips_values() {
    let storage = MemoryStorage::new();
    storage.set("a", "1").unwrap();
    storage.set("a", "2").unwrap();
    storage.set("b", "3").unwrap();

    assert_eq!(storage.get("a").unwrap(), Some("2".to_string()));
    assert_eq!(storage.get("b").unwrap(), Some("3".to_string()));
}

#[test]
fn file_storage_reads_missing_file_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("state.json"));
    assert_eq!(storage.get("anything").unwrap(), None);
}

#[test]
fn file_storage_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let storage = FileStorage::new(&path);
    storage.set("theme", "dark").unwrap();
    storage.set("lang", "en").unwrap();
    drop(storage);

    let reopened = FileStorage::new(&path);
    assert_eq!(reopened.get("theme").unwrap(), Some("dark".to_string()));
    assert_eq!(reopened.get("lang").unwrap(), Some("en".to_string()));
}

#[test]
fn file_storage_surfaces_parse_errors_on_get() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "not json at all").unwrap();

    let storage = FileStorage::new(&path);
    assert!(storage.get("theme").is_err());
}

#[test]
fn file_storage_set_replaces_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "{{{garbage").unwrap();

    let storage = FileStorage::new(&path);
    storage.set("theme", "dark").unwrap();
    assert_eq!(storage.get("theme").unwrap(), Some("dark".to_string()));
}

#[test]
fn file_storage_creates_missing_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("state.json");

    let storage = FileStorage::new(&path);
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k").unwrap(), Some("v".to_string()));
}
