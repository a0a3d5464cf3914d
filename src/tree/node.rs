//! Directory-shaped tree nodes and their report ordering.

use crate::store::MetadataRecord;
use indexmap::IndexMap;
use std::cmp::Reverse;

/// Directory node of a reconstructed tree
///
/// Both maps keep insertion order; the report's tie-break depends on it.
#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    pub directories: IndexMap<String, TreeNode>,
    pub documents: IndexMap<String, MetadataRecord>,
    /// Cumulative document size below this node; 0 until aggregated
    pub total_size: u64,
}

/// Outcome of placing a document into a node
#[derive(Debug)]
pub enum DocumentSlot {
    Inserted,
    /// A same-named document already occupied the slot and was dropped
    Replaced(MetadataRecord),
}

impl TreeNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Child directory `name`, created empty if absent
    pub fn directory_entry(&mut self, name: &str) -> &mut TreeNode {
        self.directories.entry(name.to_string()).or_default()
    }

    /// Insert a document keyed by its display name.
    ///
    /// Last write wins: a later document with the same name replaces the
    /// earlier one in place and keeps the earlier one's position.
    pub fn insert_document(&mut self, record: MetadataRecord) -> DocumentSlot {
        match self.documents.insert(record.name.clone(), record) {
            Some(previous) => DocumentSlot::Replaced(previous),
            None => DocumentSlot::Inserted,
        }
    }

    pub fn directory(&self, name: &str) -> Option<&TreeNode> {
        self.directories.get(name)
    }

    pub fn document(&self, name: &str) -> Option<&MetadataRecord> {
        self.documents.get(name)
    }

    /// Descend through directory names from this node
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&TreeNode> {
        path.iter()
            .try_fold(self, |node, name| node.directory(name.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.documents.is_empty()
    }

    /// Documents in this node and every node below it
    pub fn document_count(&self) -> usize {
        self.documents.len()
            + self
                .directories
                .values()
                .map(TreeNode::document_count)
                .sum::<usize>()
    }

    /// Documents by size, largest first; ties keep insertion order
    pub fn sorted_documents(&self) -> Vec<(&str, &MetadataRecord)> {
        let mut entries: Vec<_> = self
            .documents
            .iter()
            .map(|(name, record)| (name.as_str(), record))
            .collect();
        entries.sort_by_key(|(_, record)| Reverse(record.document_size()));
        entries
    }

    /// Directories by total size, largest first; ties keep insertion order
    pub fn sorted_directories(&self) -> Vec<(&str, &TreeNode)> {
        let mut entries: Vec<_> = self
            .directories
            .iter()
            .map(|(name, node)| (name.as_str(), node))
            .collect();
        entries.sort_by_key(|(_, node)| Reverse(node.total_size));
        entries
    }
}
