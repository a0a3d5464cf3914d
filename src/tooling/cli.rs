//! CLI Tooling
//!
//! Command-line interface for usage reports over a metadata directory. Every
//! command is read-only; the metadata directory is never modified.

use crate::analyzer::Analyzer;
use crate::config::{ConfigLoader, ReduConfig};
use crate::error::ApiError;
use crate::logging::LoggingOverrides;
use crate::report::{
    format_summary_text, format_usage_text, human_size, resolve_columns, SummaryData,
    UsageReport, UsageView,
};
use crate::store::MetadataRecord;
use crate::tree::{resolve_destination, Destination};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Redu CLI - disk usage of a tablet's documents and folders
#[derive(Parser, Debug)]
#[command(name = "redu")]
#[command(about = "Disk usage report for documents and folders in a tablet metadata store")]
pub struct Cli {
    /// Command to run (defaults to `report`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Metadata directory (defaults to the device's xochitl data directory)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Configuration file path (layered over the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The requested command, or a plain text report
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Report {
            format: OutputFormat::Text,
            trash: false,
            columns: None,
            rebuild: false,
        })
    }

    pub fn logging_overrides(&self) -> LoggingOverrides {
        LoggingOverrides {
            verbose: self.verbose,
            level: self.log_level.clone(),
            format: self.log_format.clone(),
            output: self.log_output.clone(),
            file: self.log_file.clone(),
        }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the folder tree sorted by size, largest first
    Report {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Also report documents in the trash
        #[arg(long)]
        trash: bool,
        /// Report width (defaults to the terminal width, then $COLUMNS, then 120)
        #[arg(long)]
        columns: Option<usize>,
        /// Reload metadata even if already loaded
        #[arg(long)]
        rebuild: bool,
    },
    /// Show record counts, totals and the largest top-level folders
    Summary {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show one record, its location and its raw descriptor
    Show {
        /// Record identifier (the metadata file stem)
        id: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// CLI context for one metadata directory
pub struct CliContext {
    analyzer: Analyzer,
    config: ReduConfig,
    base_dir: PathBuf,
    color: bool,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(base_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        let base_dir = config.store.resolve_base_dir(base_dir)?;
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Ok(Self {
            analyzer: Analyzer::for_directory(&base_dir),
            config,
            base_dir,
            color,
        })
    }

    /// Context around an existing analyzer (no config files consulted)
    pub fn with_analyzer(analyzer: Analyzer, config: ReduConfig) -> Self {
        Self {
            analyzer,
            config,
            base_dir: PathBuf::new(),
            color: false,
        }
    }

    pub fn config(&self) -> &ReduConfig {
        &self.config
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Execute a CLI command
    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "command finished"
        );
        result
    }

    fn execute_inner(&mut self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Report {
                format,
                trash,
                columns,
                rebuild,
            } => self.handle_report(*format, *trash, *columns, *rebuild),
            Commands::Summary { format } => self.handle_summary(*format),
            Commands::Show { id, format } => self.handle_show(id, *format),
        }
    }

    fn handle_report(
        &mut self,
        format: OutputFormat,
        trash: bool,
        columns: Option<usize>,
        rebuild: bool,
    ) -> Result<String, ApiError> {
        self.analyzer.parse(rebuild)?;
        let show_trash = trash || self.config.report.show_trash;
        let view = UsageView {
            visible: self.analyzer.visible(),
            trash: show_trash.then(|| self.analyzer.trash()),
        };

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&UsageReport::from_view(
                &view,
            ))?),
            OutputFormat::Text => {
                let cols = resolve_columns(columns, self.config.report.columns);
                Ok(format_usage_text(&view, cols, self.color))
            }
        }
    }

    fn handle_summary(&mut self, format: OutputFormat) -> Result<String, ApiError> {
        self.analyzer.parse(false)?;
        let summary = SummaryData::collect(
            self.analyzer.store(),
            self.analyzer.visible(),
            self.analyzer.trash(),
            self.analyzer.stats(),
        );
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary)?),
            OutputFormat::Text => Ok(format_summary_text(&summary, self.color)),
        }
    }

    fn handle_show(&mut self, id: &str, format: OutputFormat) -> Result<String, ApiError> {
        self.analyzer.parse(false)?;
        let store = self.analyzer.store();
        let record = store.get(id)?;
        let destination = resolve_destination(store, record)?;

        match format {
            OutputFormat::Json => {
                let value = json!({
                    "record": record,
                    "in_trash": matches!(destination, Destination::Trash),
                    "location": destination.path_names(),
                    "raw": record.raw,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Text => Ok(format_show_text(record, &destination)?),
        }
    }
}

fn format_show_text(
    record: &MetadataRecord,
    destination: &Destination<'_>,
) -> Result<String, ApiError> {
    let parent = match record.parent_id.as_deref() {
        None => "(root)".to_string(),
        Some(p) => p.to_string(),
    };
    let location = match destination {
        Destination::Trash => "trash".to_string(),
        Destination::Visible(_) => format!("/{}", destination.path_names().join("/")),
    };

    let mut out = String::new();
    out.push_str(&format!("Id: {}\n", record.id));
    out.push_str(&format!("Name: {}\n", record.name));
    out.push_str(&format!("Kind: {:?}\n", record.kind));
    out.push_str(&format!("Parent: {}\n", parent));
    out.push_str(&format!("Location: {}\n", location));
    if let Some(size) = record.size {
        out.push_str(&format!("Size: {} ({} bytes)\n", human_size(size), size));
    }
    if let Some(modified) = record.last_modified {
        out.push_str(&format!("Last modified: {}\n", modified.to_rfc3339()));
    }
    out.push_str("Descriptor:\n");
    out.push_str(&serde_json::to_string_pretty(&record.raw)?);
    Ok(out)
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Report { .. } => "report",
        Commands::Summary { .. } => "summary",
        Commands::Show { .. } => "show",
    }
}
