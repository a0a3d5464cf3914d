//! MergeService: orchestrates sources, applies merge policy, deserializes to ReduConfig.

use crate::config::sources::{environment, explicit_file, global_file};
use crate::config::ReduConfig;
use config::ConfigError;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> global file -> explicit file -> environment (highest).
    pub fn load(global: Option<&Path>, explicit: Option<&Path>) -> Result<ReduConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global)?;
        let builder = explicit_file::add_to_builder(builder, explicit)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
