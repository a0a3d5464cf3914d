use redu::analyzer::Analyzer;
use redu::config::{ReduConfig, StoreConfig};
use redu::error::{ApiError, StoreError};
use redu::tooling::cli::{CliContext, Commands, OutputFormat};
use serde_json::Value;

use crate::integration::support::MetadataDir;

fn sample_dir() -> MetadataDir {
    let dir = MetadataDir::new();
    dir.collection("r1", "Books", "");
    dir.document("r2", "Book.pdf", "r1", &[(".pdf", 1000), (".content", 24)]);
    dir.document("r3", "Old.pdf", "trash", &[(".pdf", 512)]);
    dir
}

// Plain output regardless of whether stdout is a terminal.
fn context(dir: &MetadataDir) -> CliContext {
    CliContext::with_analyzer(Analyzer::for_directory(dir.path()), ReduConfig::default())
}

fn report(format: OutputFormat, trash: bool) -> Commands {
    Commands::Report {
        format,
        trash,
        columns: Some(40),
        rebuild: false,
    }
}

#[test]
fn text_report_lists_visible_tree() {
    let dir = sample_dir();
    let mut ctx = context(&dir);
    let output = ctx.execute(&report(OutputFormat::Text, false)).unwrap();

    let expected = [
        format!("{:<34}{}", "Books  ", "1.00KB"),
        format!("{:<34}{}", "- @Book.pdf ", "1.00KB"),
    ]
    .join("\n");
    assert_eq!(output, expected);
    assert!(!output.contains("Old.pdf"));
}

#[test]
fn text_report_with_trash_section() {
    let dir = sample_dir();
    let mut ctx = context(&dir);
    let output = ctx.execute(&report(OutputFormat::Text, true)).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], format!("{:<34}{}", "Trash  ", "512.00"));
    assert_eq!(lines[4], format!("{:<34}{}", "@Old.pdf ", "512.00"));
}

#[test]
fn json_report_shape() {
    let dir = sample_dir();
    let mut ctx = context(&dir);
    let output = ctx.execute(&report(OutputFormat::Json, true)).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["visible"]["total_size"], 1024);
    assert_eq!(value["visible"]["directories"][0]["name"], "Books");
    assert_eq!(
        value["visible"]["directories"][0]["documents"][0]["id"],
        "r2"
    );
    assert_eq!(value["trash"]["total_size"], 512);
    assert_eq!(value["trash"]["documents"][0]["name"], "Old.pdf");
}

#[test]
fn json_report_omits_trash_unless_asked() {
    let dir = sample_dir();
    let mut ctx = context(&dir);
    let output = ctx.execute(&report(OutputFormat::Json, false)).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert!(value.get("trash").is_none());
}

#[test]
fn summary_counts_records() {
    let dir = sample_dir();
    let mut ctx = context(&dir);
    let output = ctx
        .execute(&Commands::Summary {
            format: OutputFormat::Json,
        })
        .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["records"], 3);
    assert_eq!(value["collections"], 1);
    assert_eq!(value["visible_documents"], 1);
    assert_eq!(value["trash_documents"], 1);
    assert_eq!(value["visible_bytes"], 1024);
    assert_eq!(value["trash_bytes"], 512);
}

#[test]
fn show_reports_location() {
    let dir = sample_dir();
    let mut ctx = context(&dir);

    let output = ctx
        .execute(&Commands::Show {
            id: "r2".to_string(),
            format: OutputFormat::Json,
        })
        .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["in_trash"], false);
    assert_eq!(value["location"][0], "Books");

    let output = ctx
        .execute(&Commands::Show {
            id: "r3".to_string(),
            format: OutputFormat::Text,
        })
        .unwrap();
    assert!(output.contains("Location: trash"));

    let output = ctx
        .execute(&Commands::Show {
            id: "r3".to_string(),
            format: OutputFormat::Json,
        })
        .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["in_trash"], true);
}

#[test]
fn show_unknown_id_is_an_error() {
    let dir = sample_dir();
    let mut ctx = context(&dir);
    let err = ctx
        .execute(&Commands::Show {
            id: "nope".to_string(),
            format: OutputFormat::Text,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::StorageError(StoreError::RecordNotFound(_))
    ));
}

#[test]
fn malformed_descriptor_fails_the_report() {
    let dir = sample_dir();
    dir.write_metadata("bad", "{not json");
    let mut ctx = context(&dir);
    let err = ctx.execute(&report(OutputFormat::Text, false)).unwrap_err();
    assert!(matches!(
        err,
        ApiError::StorageError(StoreError::MalformedRecord { .. })
    ));
}

#[test]
fn base_dir_flag_beats_configured_dir() {
    let dir = sample_dir();
    let other = MetadataDir::new();
    let store = StoreConfig {
        base_dir: Some(other.path().to_path_buf()),
    };

    let resolved = store
        .resolve_base_dir(Some(dir.path().to_path_buf()))
        .unwrap();
    assert_eq!(resolved, dunce::canonicalize(dir.path()).unwrap());

    let mut config = ReduConfig::default();
    config.store = store;
    let mut ctx = CliContext::with_analyzer(Analyzer::for_directory(&resolved), config);
    let output = ctx.execute(&report(OutputFormat::Text, false)).unwrap();
    assert!(output.contains("Book.pdf"));
}

#[test]
fn missing_base_dir_is_rejected() {
    let dir = MetadataDir::new();
    let missing = dir.path().join("absent");
    let err = StoreConfig::default()
        .resolve_base_dir(Some(missing))
        .unwrap_err();
    assert!(matches!(err, ApiError::ConfigError(_)));
}
