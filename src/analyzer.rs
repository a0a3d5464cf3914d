//! Analyzer
//!
//! Owns the record store and both aggregated trees for one metadata
//! directory. `parse` runs ingestion, tree construction and aggregation once
//! and serves the cached result afterwards until a rebuild is requested.

use crate::error::ApiError;
use crate::store::{
    DirectorySource, FileSizeOracle, MetadataSource, RecordStore, SizeOracle,
};
use crate::tree::{aggregate_sizes, BuildStats, BuiltTrees, TreeBuilder, TreeNode};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

pub struct Analyzer {
    source: Box<dyn MetadataSource>,
    oracle: Box<dyn SizeOracle>,
    store: RecordStore,
    trees: BuiltTrees,
}

impl Analyzer {
    pub fn new(source: Box<dyn MetadataSource>, oracle: Box<dyn SizeOracle>) -> Self {
        Self {
            source,
            oracle,
            store: RecordStore::new(),
            trees: BuiltTrees::default(),
        }
    }

    /// Analyzer over a directory of `.metadata` files and their content files
    pub fn for_directory(base_dir: &Path) -> Self {
        Self::new(
            Box::new(DirectorySource::new(base_dir)),
            Box::new(FileSizeOracle::new(base_dir)),
        )
    }

    /// Load, build and aggregate; returns the visible tree.
    ///
    /// Work is only done when the store is empty. `rerun` empties it first.
    /// A failure at any stage leaves the analyzer empty.
    pub fn parse(&mut self, rerun: bool) -> Result<&TreeNode, ApiError> {
        if rerun {
            self.store.clear();
        }

        if self.store.is_empty() {
            if let Err(e) = self.rebuild() {
                self.store.clear();
                self.trees = BuiltTrees::default();
                return Err(e);
            }
        } else {
            debug!(records = self.store.len(), "using cached trees");
        }

        Ok(&self.trees.visible)
    }

    fn rebuild(&mut self) -> Result<(), ApiError> {
        let started = Instant::now();
        self.store
            .load(self.source.as_ref(), self.oracle.as_ref(), true)?;

        let mut trees = TreeBuilder::new(&self.store).build()?;
        let visible = aggregate_sizes(&mut trees.visible);
        let trash = aggregate_sizes(&mut trees.trash);
        self.trees = trees;

        info!(
            visible_bytes = visible,
            trash_bytes = trash,
            duration_ms = started.elapsed().as_millis() as u64,
            "usage computed"
        );
        Ok(())
    }

    pub fn visible(&self) -> &TreeNode {
        &self.trees.visible
    }

    pub fn trash(&self) -> &TreeNode {
        &self.trees.trash
    }

    pub fn stats(&self) -> &BuildStats {
        &self.trees.stats
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}
