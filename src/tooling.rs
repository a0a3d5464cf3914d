//! Tooling & Integration Layer
//!
//! Command-line surface over the analyzer.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, OutputFormat};
