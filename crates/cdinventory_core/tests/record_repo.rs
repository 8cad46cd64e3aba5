use cdinventory_core::{
    load_store, save_store, FileRecordRepository, Record, RecordRepository, RecordStore,
    StoreError,
};
use std::fs;

fn sample_store() -> RecordStore {
    RecordStore::from(vec![
        Record::new(3, "Rumours", "Fleetwood Mac"),
        Record::new(1, "Abbey Road", "The Beatles"),
        Record::new(3, "Tusk", "Fleetwood Mac"),
        Record::new(-1, "", "unknown"),
    ])
}

#[test]
fn save_then_load_roundtrip_preserves_order_and_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRecordRepository::new(dir.path().join("CDInventory.dat"));

    repo.save(&sample_store()).unwrap();
    let loaded = repo.load().unwrap();

    assert_eq!(loaded, sample_store());
}

#[test]
fn empty_store_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.dat");

    save_store(&path, &RecordStore::new()).unwrap();

    assert!(load_store(&path).unwrap().is_empty());
}

#[test]
fn save_overwrites_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRecordRepository::new(dir.path().join("CDInventory.dat"));

    repo.save(&sample_store()).unwrap();
    let smaller = RecordStore::from(vec![Record::new(2, "Thriller", "Michael Jackson")]);
    repo.save(&smaller).unwrap();

    assert_eq!(repo.load().unwrap(), smaller);
}

#[test]
fn load_missing_file_returns_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.dat");
    let repo = FileRecordRepository::new(&path);

    let err = repo.load().unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, StoreError::NotFound(ref missing) if *missing == path));
    assert_eq!(repo.location(), path.as_path());
}

#[test]
fn load_corrupt_file_returns_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.dat");
    fs::write(&path, b"not an inventory").unwrap();

    let err = load_store(&path).unwrap_err();

    assert!(matches!(err, StoreError::Decode { .. }), "unexpected error: {err}");
    assert!(!err.is_not_found());
}

#[test]
fn load_empty_file_returns_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.dat");
    fs::write(&path, b"").unwrap();

    let err = load_store(&path).unwrap_err();

    assert!(matches!(err, StoreError::Decode { .. }), "unexpected error: {err}");
}

#[test]
fn load_directory_returns_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_store(dir.path()).unwrap_err();

    assert!(matches!(err, StoreError::Read { .. }), "unexpected error: {err}");
}

#[test]
fn save_into_missing_directory_returns_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("CDInventory.dat");

    let err = save_store(&path, &sample_store()).unwrap_err();

    assert!(matches!(err, StoreError::Write { .. }), "unexpected error: {err}");
    assert!(!path.exists());
}
