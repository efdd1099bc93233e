use std::fs;

use registro_clientes::uploads::UploadStore;

#[test]
fn test_store_file_copies_bytes_under_unique_name() {
    let src_dir = tempfile::tempdir().unwrap();
    let store_dir = tempfile::tempdir().unwrap();

    let src = src_dir.path().join("upload.tmp");
    fs::write(&src, b"foto-bytes").unwrap();

    let store = UploadStore::new(store_dir.path()).unwrap();

    let first = store.store_file(&src, "foto.png").unwrap();
    let second = store.store_file(&src, "foto.png").unwrap();

    assert_ne!(first, second);
    assert!(first.ends_with("-foto.png"));
    assert_eq!(fs::read(store.dir().join(&first)).unwrap(), b"foto-bytes");
    assert_eq!(fs::read(store.dir().join(&second)).unwrap(), b"foto-bytes");
}

#[test]
fn test_store_file_strips_path_components() {
    let src_dir = tempfile::tempdir().unwrap();
    let store_dir = tempfile::tempdir().unwrap();

    let src = src_dir.path().join("upload.tmp");
    fs::write(&src, b"x").unwrap();

    let store = UploadStore::new(store_dir.path()).unwrap();
    let stored = store.store_file(&src, "../../etc/passwd").unwrap();

    assert!(stored.ends_with("-passwd"));
    assert!(store.dir().join(&stored).is_file());
}

#[test]
fn test_missing_source_is_an_error() {
    let store_dir = tempfile::tempdir().unwrap();
    let store = UploadStore::new(store_dir.path()).unwrap();

    let missing = store_dir.path().join("no-such-file");
    assert!(store.store_file(&missing, "foto.png").is_err());
}
