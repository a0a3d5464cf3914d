//! Error types for ingestion, tree construction, and the command layer.

use thiserror::Error;

/// Errors raised while loading or querying the record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Malformed record {key}: {reason}")]
    MalformedRecord { key: String, reason: String },

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StoreError {
    pub(crate) fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::MalformedRecord {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while resolving parent chains into trees
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("Record {record} has a parent chain through unknown record {missing}")]
    DanglingParent { record: String, missing: String },

    #[error("Record {record} has a cyclic parent chain (revisits {repeated})")]
    CyclicParentChain { record: String, repeated: String },
}

/// Top-level error surfaced to callers of the analyzer and the CLI
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StoreError),

    #[error("Tree error: {0}")]
    TreeError(#[from] TreeError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
