//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::ReduConfig;
use config::ConfigError;
use std::path::{Path, PathBuf};

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the global config file (~/.config/redu/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        super::xdg::config_home()
            .ok()
            .map(|home| home.join("redu").join("config.toml"))
    }

    /// Load configuration from the global file, an optional explicit file,
    /// and the environment.
    pub fn load(explicit: Option<&Path>) -> Result<ReduConfig, ConfigError> {
        MergeService::load(Self::global_config_path().as_deref(), explicit)
    }
}
