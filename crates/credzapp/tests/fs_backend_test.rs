use credzapp::model::{CredentialFormat, DocumentCategory, Metadata};
use credzapp::store::backend::StorageBackend;
use credzapp::store::fs_backend::FsBackend;
use credzapp::transactions::{Transaction, TransactionKind, TransactionStatus};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;
use uuid::Uuid;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_payload_io() {
    let (_dir, backend) = setup();
    let id = Uuid::new_v4();

    // 1. Write
    backend.write_payload(&id, "opaque credential").unwrap();

    // 2. Read
    let payload = backend.read_payload(&id).unwrap();
    assert_eq!(payload, Some("opaque credential".to_string()));

    // 3. Delete
    backend.delete_payload(&id).unwrap();
    let payload_after = backend.read_payload(&id).unwrap();
    assert_eq!(payload_after, None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    let id = Uuid::new_v4();

    backend.write_payload(&id, "atomic").unwrap();

    let expected_path = dir.path().join(format!("doc-{}.cred", id));
    assert!(expected_path.exists());

    let on_disk = fs::read_to_string(&expected_path).unwrap();
    assert_eq!(on_disk, "atomic");

    // Verify NO .tmp files are left behind
    let entries = fs::read_dir(dir.path()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_index_roundtrip() {
    let (_dir, backend) = setup();

    let metadata = Metadata::new(
        "PID",
        "eu.europa.ec.eudi.pid.1",
        CredentialFormat::SdJwtVc,
        DocumentCategory::Government,
        "Utopia Registry",
    );
    let mut index = HashMap::new();
    index.insert(metadata.id, metadata.clone());

    backend.save_index(&index).unwrap();
    let loaded = backend.load_index().unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get(&metadata.id).unwrap(), &metadata);
}

#[test]
fn test_fs_backend_empty_store_loads_empty() {
    let (_dir, backend) = setup();
    assert!(backend.load_index().unwrap().is_empty());
    assert!(backend.load_log().unwrap().is_empty());
    assert!(backend.list_payload_ids().unwrap().is_empty());
}

#[test]
fn test_fs_backend_list_payload_ids_ignores_foreign_files() {
    let (dir, backend) = setup();
    let id = Uuid::new_v4();
    backend.write_payload(&id, "mine").unwrap();

    // Files that merely look similar must not be picked up.
    fs::write(dir.path().join("doc-not-a-uuid.cred"), "junk").unwrap();
    fs::write(dir.path().join("notes.txt"), "junk").unwrap();
    fs::write(dir.path().join(format!("doc-{}.bak", Uuid::new_v4())), "junk").unwrap();

    let ids = backend.list_payload_ids().unwrap();
    assert_eq!(ids, vec![id]);
}

#[test]
fn test_fs_backend_log_roundtrip() {
    let (_dir, backend) = setup();

    let log = vec![
        Transaction::new(
            "PID",
            "Utopia Registry",
            TransactionKind::Issuance,
            TransactionStatus::Completed,
        ),
        Transaction::new(
            "PID",
            "CarRentals Inc",
            TransactionKind::Presentation,
            TransactionStatus::Failed,
        ),
    ];
    backend.save_log(&log).unwrap();

    let loaded = backend.load_log().unwrap();
    assert_eq!(loaded, log);
}

#[test]
fn test_fs_backend_missing_dir_is_created_on_write() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("does").join("not").join("exist");
    let backend = FsBackend::new(nested.clone());

    backend.write_payload(&Uuid::new_v4(), "payload").unwrap();
    assert!(nested.exists());
}
