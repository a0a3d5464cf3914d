use clap::{CommandFactory, Parser};
use redu::tooling::cli::{Cli, Commands, OutputFormat};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["redu"],
        vec!["redu", "report"],
        vec!["redu", "report", "--format", "json"],
        vec!["redu", "report", "--trash", "--columns", "80"],
        vec!["redu", "report", "--rebuild"],
        vec!["redu", "summary"],
        vec!["redu", "summary", "--format", "json"],
        vec!["redu", "show", "some-id"],
        vec!["redu", "show", "some-id", "--format", "json"],
        vec!["redu", "--base-dir", "/tmp/xochitl", "report"],
        vec!["redu", "report", "--verbose", "--log-level", "debug"],
        vec!["redu", "--config", "redu.toml", "summary"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_invalid_input() {
    assert!(Cli::try_parse_from(["redu", "report", "--format", "yaml"]).is_err());
    assert!(Cli::try_parse_from(["redu", "report", "--columns", "wide"]).is_err());
    assert!(Cli::try_parse_from(["redu", "show"]).is_err());
    assert!(Cli::try_parse_from(["redu", "scan"]).is_err());
}

#[test]
fn bare_invocation_runs_text_report() {
    let cli = Cli::try_parse_from(["redu"]).unwrap();
    match cli.command_or_default() {
        Commands::Report {
            format,
            trash,
            columns,
            rebuild,
        } => {
            assert_eq!(format, OutputFormat::Text);
            assert!(!trash);
            assert_eq!(columns, None);
            assert!(!rebuild);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "redu",
        "report",
        "--base-dir",
        "/data/xochitl",
        "--log-format",
        "json",
    ])
    .unwrap();
    assert_eq!(
        cli.base_dir.as_deref(),
        Some(std::path::Path::new("/data/xochitl"))
    );
    assert_eq!(cli.logging_overrides().format.as_deref(), Some("json"));
}

#[test]
fn help_lists_every_command() {
    let help = Cli::command().render_long_help().to_string();
    for name in ["report", "summary", "show"] {
        assert!(help.contains(name), "help is missing {name}");
    }
}
