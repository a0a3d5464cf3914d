//! StoreConfig and resolution of the metadata directory.

use crate::config::xdg;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding `<id>.metadata` and content files; unset means the
    /// device default
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Resolve the metadata directory: CLI override, then config, then the
    /// XDG default. The result is canonicalized and must be a directory.
    pub fn resolve_base_dir(&self, cli_override: Option<PathBuf>) -> Result<PathBuf, ApiError> {
        let chosen = match cli_override.or_else(|| self.base_dir.clone()) {
            Some(dir) => dir,
            None => xdg::default_metadata_dir()?,
        };

        let canonical = dunce::canonicalize(&chosen).map_err(|e| {
            ApiError::ConfigError(format!(
                "Metadata directory {} is not accessible: {}",
                chosen.display(),
                e
            ))
        })?;
        if !canonical.is_dir() {
            return Err(ApiError::ConfigError(format!(
                "Metadata path {} is not a directory",
                canonical.display()
            )));
        }
        Ok(canonical)
    }
}
