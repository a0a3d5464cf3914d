//! Core types shared by the store, the tree builder, and the report.

use serde::{Deserialize, Serialize};

/// RecordId: storage key of a metadata record (the `<id>` of `<id>.metadata`)
pub type RecordId = String;

/// Parent sentinel marking a record as discarded
pub const TRASH_PARENT: &str = "trash";

/// Record kind as tagged in the descriptor's `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    #[serde(rename = "CollectionType")]
    Collection,
    #[serde(rename = "DocumentType")]
    Document,
    /// Any other tag (e.g. `TemplateType`); never sized, may still be a parent
    Other,
}

impl RecordKind {
    /// Parse the descriptor tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "CollectionType" => RecordKind::Collection,
            "DocumentType" => RecordKind::Document,
            _ => RecordKind::Other,
        }
    }
}

/// Where a parent reference points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRef<'a> {
    Root,
    Trash,
    Record(&'a str),
}

impl<'a> ParentRef<'a> {
    pub fn classify(parent_id: Option<&'a str>) -> Self {
        match parent_id {
            None | Some("") => ParentRef::Root,
            Some(TRASH_PARENT) => ParentRef::Trash,
            Some(id) => ParentRef::Record(id),
        }
    }
}
