//! Metadata Record Store
//!
//! Loads every metadata descriptor from a [`MetadataSource`] and indexes the
//! resulting records by identifier. Document records carry a size computed by
//! a [`SizeOracle`] at ingestion time. The store is written only by `load` and
//! is read-only for the tree builder and aggregator.

pub mod descriptor;
pub mod oracle;
pub mod source;

pub use oracle::{FileSizeOracle, SizeOracle, CONTENT_EXTENSIONS};
pub use source::{DirectorySource, InMemorySource, MetadataSource};

use crate::error::StoreError;
use crate::types::{ParentRef, RecordId, RecordKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// MetadataRecord: one document or collection from the metadata source
#[derive(Debug, Clone, Serialize)]
pub struct MetadataRecord {
    pub id: RecordId,
    pub name: String,
    /// Empty/absent means root; `"trash"` means discarded
    pub parent_id: Option<RecordId>,
    pub kind: RecordKind,
    /// Byte count of existing content files; documents only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    /// Source descriptor, preserved verbatim
    #[serde(skip)]
    pub raw: serde_json::Value,
}

impl MetadataRecord {
    /// Build a collection record with a synthesized raw descriptor
    pub fn collection(id: &str, name: &str, parent: &str) -> Self {
        Self::synthesized(id, name, parent, RecordKind::Collection, None)
    }

    /// Build a document record with a synthesized raw descriptor
    pub fn document(id: &str, name: &str, parent: &str, size: u64) -> Self {
        Self::synthesized(id, name, parent, RecordKind::Document, Some(size))
    }

    fn synthesized(
        id: &str,
        name: &str,
        parent: &str,
        kind: RecordKind,
        size: Option<u64>,
    ) -> Self {
        let raw = serde_json::json!({
            "parent": parent,
            "visibleName": name,
            "type": kind,
        });
        Self {
            id: id.to_string(),
            name: name.to_string(),
            parent_id: Some(parent.to_string()).filter(|p| !p.is_empty()),
            kind,
            size,
            last_modified: None,
            raw,
        }
    }

    pub fn is_document(&self) -> bool {
        self.kind == RecordKind::Document
    }

    pub fn parent_ref(&self) -> ParentRef<'_> {
        ParentRef::classify(self.parent_id.as_deref())
    }

    /// Size for aggregation; collections count as zero
    pub fn document_size(&self) -> u64 {
        self.size.unwrap_or(0)
    }
}

/// Identifier-indexed record store
///
/// Records are kept in identifier order so that every pass over the store is
/// deterministic.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: BTreeMap<RecordId, MetadataRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-materialised records
    pub fn from_records(records: impl IntoIterator<Item = MetadataRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    /// Load every descriptor from `source`.
    ///
    /// A no-op when the store is already populated, unless `force` is set, in
    /// which case the mapping is cleared and rebuilt. Any malformed descriptor
    /// aborts the load and leaves the store empty.
    pub fn load(
        &mut self,
        source: &dyn MetadataSource,
        oracle: &dyn SizeOracle,
        force: bool,
    ) -> Result<usize, StoreError> {
        if force {
            self.records.clear();
        } else if !self.records.is_empty() {
            debug!(records = self.records.len(), "store already loaded; skipping");
            return Ok(self.records.len());
        }

        let mut records = BTreeMap::new();
        for key in source.keys()? {
            let text = source.read(&key)?;
            let parsed = descriptor::parse_descriptor(&key, &text)?;
            let size = match parsed.kind {
                RecordKind::Document => Some(oracle.content_size(&key)),
                RecordKind::Collection | RecordKind::Other => None,
            };
            records.insert(
                key.clone(),
                MetadataRecord {
                    id: key,
                    name: parsed.name,
                    parent_id: parsed.parent_id,
                    kind: parsed.kind,
                    size,
                    last_modified: parsed.last_modified,
                    raw: parsed.raw,
                },
            );
        }

        self.records = records;
        info!(
            records = self.records.len(),
            documents = self.documents().count(),
            "metadata loaded"
        );
        Ok(self.records.len())
    }

    /// Get a record by identifier
    pub fn get(&self, id: &str) -> Result<&MetadataRecord, StoreError> {
        self.records
            .get(id)
            .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))
    }

    pub fn lookup(&self, id: &str) -> Option<&MetadataRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// All records in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &MetadataRecord> {
        self.records.values()
    }

    pub fn documents(&self) -> impl Iterator<Item = &MetadataRecord> {
        self.iter().filter(|r| r.is_document())
    }

    pub fn collections(&self) -> impl Iterator<Item = &MetadataRecord> {
        self.iter().filter(|r| r.kind == RecordKind::Collection)
    }
}
