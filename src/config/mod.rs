//! Configuration
//!
//! Layered configuration for redu. Sources are merged by [`merge::service`]
//! in precedence order (lowest first): built-in defaults, the global file
//! `$XDG_CONFIG_HOME/redu/config.toml`, an explicit `--config` file, and
//! `REDU_*` environment variables with `__` separating nested keys.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;
pub mod storage;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;
pub use storage::metadata_dir::StoreConfig;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Report presentation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Fixed report width; unset means detect from `COLUMNS`
    #[serde(default)]
    pub columns: Option<usize>,

    /// Always include the trash tree in reports
    #[serde(default)]
    pub show_trash: bool,
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReduConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
