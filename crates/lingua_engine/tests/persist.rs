use std::fs;

use lingua_engine::{
    ensure_state_dir, AtomicFileWriter, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore,
    PersistError,
};
use tempfile::TempDir;

#[test]
fn creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());
    ensure_state_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("messages.json", "[]").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "[]");

    let second = writer.write("messages.json", "[1]").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "[1]");
}

#[test]
fn writer_fails_when_dir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("messages.json", "[]").is_err());
    assert!(!file_path.with_file_name("messages.json").exists());
}

#[test]
fn file_store_round_trips_slots_and_reports_missing() {
    let temp = TempDir::new().unwrap();
    let store = FileKeyValueStore::new(temp.path().join("state"));

    assert_eq!(store.get("messages").unwrap(), None);
    store.set("messages", r#"[{"id":"1"}]"#).unwrap();
    store.set("messageStates", "{}").unwrap();

    assert_eq!(
        store.get("messages").unwrap().as_deref(),
        Some(r#"[{"id":"1"}]"#)
    );
    assert_eq!(store.get("messageStates").unwrap().as_deref(), Some("{}"));
    assert!(store.dir().join("messageStates.json").is_file());

    // A second store over the same directory sees the same slots.
    let reopened = FileKeyValueStore::new(store.dir().to_path_buf());
    assert_eq!(reopened.get("messageStates").unwrap().as_deref(), Some("{}"));
}

#[test]
fn file_store_rejects_path_like_slots() {
    let temp = TempDir::new().unwrap();
    let store = FileKeyValueStore::new(temp.path());

    assert!(matches!(
        store.set("../escape", "x"),
        Err(PersistError::InvalidSlot(_))
    ));
    assert!(matches!(store.get(""), Err(PersistError::InvalidSlot(_))));
}

#[test]
fn memory_store_overwrites() {
    let store = MemoryKeyValueStore::new();
    store.set("messages", "a").unwrap();
    store.set("messages", "b").unwrap();
    assert_eq!(store.get("messages").unwrap().as_deref(), Some("b"));
    assert_eq!(store.get("other").unwrap(), None);
}
