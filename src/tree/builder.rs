//! Tree Builder
//!
//! Turns the flat, parent-linked record set into two disjoint trees: the
//! visible tree and the trash tree. Each document's parent chain is walked
//! once, iteratively, with a visited set so that cyclic chains fail instead of
//! looping.

use crate::error::TreeError;
use crate::store::{MetadataRecord, RecordStore};
use crate::tree::node::{DocumentSlot, TreeNode};
use crate::types::ParentRef;
use std::collections::HashSet;
use tracing::{debug, info};

/// Where a document lands after its parent chain has been resolved
#[derive(Debug, Clone)]
pub enum Destination<'a> {
    /// Visible tree; ancestors ordered furthest first
    Visible(Vec<&'a MetadataRecord>),
    /// Directly under the trash root
    Trash,
}

impl<'a> Destination<'a> {
    /// Directory names from the tree root down to the document's parent
    pub fn path_names(&self) -> Vec<&'a str> {
        match self {
            Destination::Visible(ancestors) => {
                ancestors.iter().map(|record| record.name.as_str()).collect()
            }
            Destination::Trash => Vec::new(),
        }
    }
}

/// Counters collected while building
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub visible_documents: usize,
    pub trash_documents: usize,
    /// Documents dropped because a same-named sibling was inserted later
    pub replaced_documents: usize,
}

/// Result of a build: the two tree roots plus counters
#[derive(Debug, Clone, Default)]
pub struct BuiltTrees {
    pub visible: TreeNode,
    pub trash: TreeNode,
    pub stats: BuildStats,
}

/// Builds trees from a loaded record store
pub struct TreeBuilder<'a> {
    store: &'a RecordStore,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Place every document into the visible or trash tree.
    ///
    /// Fails on the first dangling or cyclic parent chain; no partial trees
    /// are returned.
    pub fn build(&self) -> Result<BuiltTrees, TreeError> {
        let mut visible = TreeNode::new();
        let mut trash = TreeNode::new();
        let mut stats = BuildStats::default();

        for document in self.store.documents() {
            let node = match self.resolve(document)? {
                Destination::Visible(ancestors) => {
                    stats.visible_documents += 1;
                    ancestors
                        .iter()
                        .fold(&mut visible, |node, ancestor| {
                            node.directory_entry(&ancestor.name)
                        })
                }
                Destination::Trash => {
                    stats.trash_documents += 1;
                    &mut trash
                }
            };

            // Name collisions are accepted: the later document takes the slot.
            if let DocumentSlot::Replaced(previous) = node.insert_document(document.clone()) {
                stats.replaced_documents += 1;
                debug!(
                    name = %document.name,
                    kept = %document.id,
                    dropped = %previous.id,
                    "document name collision; later record replaces earlier"
                );
            }
        }

        info!(
            visible = stats.visible_documents,
            trash = stats.trash_documents,
            replaced = stats.replaced_documents,
            "trees built"
        );
        Ok(BuiltTrees {
            visible,
            trash,
            stats,
        })
    }

    /// Walk `record`'s parent chain and decide its destination.
    pub fn resolve(&self, record: &'a MetadataRecord) -> Result<Destination<'a>, TreeError> {
        resolve_destination(self.store, record)
    }
}

/// Walk the parent chain of `record` up to root or trash.
///
/// Any record on the chain is treated as a directory, whatever its kind.
pub fn resolve_destination<'a>(
    store: &'a RecordStore,
    record: &'a MetadataRecord,
) -> Result<Destination<'a>, TreeError> {
    let mut visited: HashSet<&'a str> = HashSet::new();
    visited.insert(record.id.as_str());
    let mut ancestors: Vec<&'a MetadataRecord> = Vec::new();
    let mut current = record.parent_ref();

    loop {
        match current {
            ParentRef::Root => {
                ancestors.reverse();
                return Ok(Destination::Visible(ancestors));
            }
            // Trash is flat: collections between the record and trash are dropped.
            ParentRef::Trash => return Ok(Destination::Trash),
            ParentRef::Record(id) => {
                if !visited.insert(id) {
                    return Err(TreeError::CyclicParentChain {
                        record: record.id.clone(),
                        repeated: id.to_string(),
                    });
                }
                let parent = store.lookup(id).ok_or_else(|| TreeError::DanglingParent {
                    record: record.id.clone(),
                    missing: id.to_string(),
                })?;
                ancestors.push(parent);
                current = parent.parent_ref();
            }
        }
    }
}
