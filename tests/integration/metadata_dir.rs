use redu::error::StoreError;
use redu::store::{DirectorySource, FileSizeOracle, RecordStore};
use redu::types::RecordKind;

use crate::integration::support::MetadataDir;

#[test]
fn loads_records_and_content_sizes_from_disk() {
    let dir = MetadataDir::new();
    dir.collection("c1", "Books", "");
    dir.document(
        "d1",
        "Book.pdf",
        "c1",
        &[(".pdf", 1000), (".content", 20), (".pagedata", 4)],
    );
    dir.document("d2", "Notebook", "", &[(".content", 50)]);
    // Page thumbnails and other companions do not count
    std::fs::create_dir(dir.path().join("d2.thumbnails")).unwrap();
    std::fs::write(dir.path().join("d2.local"), vec![0u8; 77]).unwrap();

    let mut store = RecordStore::new();
    let loaded = store
        .load(
            &DirectorySource::new(dir.path()),
            &FileSizeOracle::new(dir.path()),
            false,
        )
        .unwrap();

    assert_eq!(loaded, 3);
    assert_eq!(store.get("c1").unwrap().kind, RecordKind::Collection);
    assert_eq!(store.get("c1").unwrap().size, None);
    assert_eq!(store.get("d1").unwrap().size, Some(1024));
    assert_eq!(store.get("d2").unwrap().size, Some(50));
    assert_eq!(store.get("c1").unwrap().raw["deleted"], false);
}

#[test]
fn document_without_content_has_zero_size() {
    let dir = MetadataDir::new();
    dir.document("d1", "Empty", "", &[]);

    let mut store = RecordStore::new();
    store
        .load(
            &DirectorySource::new(dir.path()),
            &FileSizeOracle::new(dir.path()),
            false,
        )
        .unwrap();
    assert_eq!(store.get("d1").unwrap().size, Some(0));
}

#[test]
fn malformed_file_aborts_load() {
    let dir = MetadataDir::new();
    dir.collection("c1", "Books", "");
    dir.write_metadata("broken", r#"{"visibleName": "No parent", "type": "DocumentType"}"#);

    let mut store = RecordStore::new();
    let err = store
        .load(
            &DirectorySource::new(dir.path()),
            &FileSizeOracle::new(dir.path()),
            false,
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::MalformedRecord { ref key, .. } if key == "broken"));
    assert!(store.is_empty());
}

#[test]
fn template_descriptors_are_loaded_not_rejected() {
    let dir = MetadataDir::new();
    dir.document("d1", "Book.pdf", "", &[(".pdf", 10)]);
    dir.write_metadata(
        "t",
        r#"{"parent": "", "visibleName": "Lined", "type": "TemplateType"}"#,
    );
    std::fs::write(dir.path().join("t.pdf"), vec![0u8; 99]).unwrap();

    let mut store = RecordStore::new();
    let loaded = store
        .load(
            &DirectorySource::new(dir.path()),
            &FileSizeOracle::new(dir.path()),
            false,
        )
        .unwrap();

    assert_eq!(loaded, 2);
    assert_eq!(store.get("t").unwrap().kind, RecordKind::Other);
    assert_eq!(store.get("t").unwrap().size, None);
    assert_eq!(store.documents().count(), 1);
}
