//! Metadata sources: where descriptors are read from.

use crate::error::StoreError;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Descriptor file suffix; the file stem is the record identifier
pub const METADATA_SUFFIX: &str = ".metadata";

/// A keyed collection of raw metadata descriptors
pub trait MetadataSource {
    /// All descriptor keys, in a stable order
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Raw descriptor text for `key`
    fn read(&self, key: &str) -> Result<String, StoreError>;
}

/// Flat directory of `<id>.metadata` files
#[derive(Debug, Clone)]
pub struct DirectorySource {
    base_dir: PathBuf,
}

impl DirectorySource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl MetadataSource for DirectorySource {
    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        for entry in WalkDir::new(&self.base_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| StoreError::IoError(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            if let Some(key) = file_name.strip_suffix(METADATA_SUFFIX) {
                keys.push(key.to_string());
            }
        }
        keys.sort();
        debug!(
            base_dir = %self.base_dir.display(),
            descriptors = keys.len(),
            "enumerated metadata directory"
        );
        Ok(keys)
    }

    fn read(&self, key: &str) -> Result<String, StoreError> {
        let path = self.base_dir.join(format!("{}{}", key, METADATA_SUFFIX));
        Ok(std::fs::read_to_string(path)?)
    }
}

/// In-memory descriptors keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    descriptors: BTreeMap<String, String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, descriptor: impl Into<String>) {
        self.descriptors.insert(key.into(), descriptor.into());
    }
}

impl MetadataSource for InMemorySource {
    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.descriptors.keys().cloned().collect())
    }

    fn read(&self, key: &str) -> Result<String, StoreError> {
        self.descriptors
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::RecordNotFound(key.to_string()))
    }
}
