use proptest::prelude::*;
use redu::store::{MetadataRecord, RecordStore};
use redu::tree::{aggregate_sizes, TreeBuilder};

#[test]
fn trash_example() {
    let store = RecordStore::from_records(vec![
        MetadataRecord::collection("r1", "Books", ""),
        MetadataRecord::document("r2", "Book.pdf", "r1", 1024),
        MetadataRecord::document("r3", "Old.pdf", "trash", 512),
    ]);
    let mut trees = TreeBuilder::new(&store).build().unwrap();
    aggregate_sizes(&mut trees.visible);
    aggregate_sizes(&mut trees.trash);

    assert!(trees.trash.document("Old.pdf").is_some());
    assert_eq!(trees.trash.total_size, 512);
    assert!(trees.visible.document("Old.pdf").is_none());
    assert!(trees
        .visible
        .directories
        .values()
        .all(|d| d.document("Old.pdf").is_none()));
    assert_eq!(trees.visible.total_size, 1024);
}

#[test]
fn trashed_collection_keeps_its_documents_out_of_view() {
    let store = RecordStore::from_records(vec![
        MetadataRecord::collection("c1", "Archive", "trash"),
        MetadataRecord::collection("c2", "Visible", ""),
        MetadataRecord::document("d1", "a.pdf", "c1", 3),
        MetadataRecord::document("d2", "b.pdf", "c2", 4),
    ]);
    let trees = TreeBuilder::new(&store).build().unwrap();

    assert!(trees.visible.directory("Archive").is_none());
    assert!(trees.trash.directories.is_empty());
    assert_eq!(trees.trash.documents.len(), 1);
    assert_eq!(trees.stats.trash_documents, 1);
    assert_eq!(trees.stats.visible_documents, 1);
}

proptest! {
    // A chain of `depth` collections rooted at either trash or root, with one
    // document at the bottom of each chain.
    #[test]
    fn trash_documents_are_never_nested(
        chains in prop::collection::vec((0usize..5, any::<bool>(), 0u64..10_000), 1..20)
    ) {
        let mut records = Vec::new();
        let mut expected_trash = 0u64;
        let mut expected_visible = 0u64;
        for (i, (depth, trashed, size)) in chains.iter().enumerate() {
            let mut parent = if *trashed { "trash".to_string() } else { String::new() };
            for level in 0..*depth {
                let id = format!("c{}-{}", i, level);
                records.push(MetadataRecord::collection(&id, &format!("dir{}", level), &parent));
                parent = id;
            }
            records.push(MetadataRecord::document(&format!("d{}", i), &format!("doc{}", i), &parent, *size));
            if *trashed {
                expected_trash += size;
            } else {
                expected_visible += size;
            }
        }

        let store = RecordStore::from_records(records);
        let mut trees = TreeBuilder::new(&store).build().unwrap();
        aggregate_sizes(&mut trees.visible);
        aggregate_sizes(&mut trees.trash);

        prop_assert!(trees.trash.directories.is_empty());
        prop_assert_eq!(trees.trash.total_size, expected_trash);
        prop_assert_eq!(trees.visible.total_size, expected_visible);
        prop_assert_eq!(
            trees.trash.documents.len() + trees.visible.document_count(),
            chains.len()
        );
    }
}
