//! CLI parsing and command dispatch

#![cfg(feature = "cli")]

use clap::Parser;
use ipintel::cli::{Cli, Commands, ConfigCommands};
use ipintel::config::StaticConfig;
use ipintel::interfaces::cli::{CliError, run_cli_command};

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["ipintel"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[tokio::test]
async fn test_area_command() {
    let cli = parse(&["area", "POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))", "--json"]);
    assert!(run_cli_command(cli.command).await.is_ok());
}

#[tokio::test]
async fn test_area_command_strict_failure() {
    let cli = parse(&["area", "NOT A GEOMETRY", "--strict"]);
    let err = run_cli_command(cli.command).await.unwrap_err();
    assert!(matches!(err, CliError::ParseError(_)));
}

#[tokio::test]
async fn test_area_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("area.wkt");
    std::fs::write(&path, "MULTIPOINT((1 1), (2 2))").unwrap();

    let path_str = path.to_string_lossy().into_owned();
    let cli = parse(&["area", "--file", path_str.as_str()]);
    assert!(run_cli_command(cli.command).await.is_ok());
}

#[test]
fn test_area_argument_conflicts_with_file() {
    let result = Cli::try_parse_from(["ipintel", "area", "POINT(0 0)", "--file", "x.wkt"]);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_engine_command() {
    let cli = parse(&["engine", "--profile", "MaxPerformance", "--concurrency", "2", "--json"]);
    assert!(run_cli_command(cli.command).await.is_ok());
}

#[tokio::test]
async fn test_engine_command_rejects_zero_concurrency() {
    let cli = parse(&["engine", "--concurrency", "0"]);
    let err = run_cli_command(cli.command).await.unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)));
}

#[tokio::test]
async fn test_marshal_command() {
    let cli = parse(&["marshal", "Päijät-Häme"]);
    assert!(run_cli_command(cli.command).await.is_ok());
}

#[tokio::test]
async fn test_lookup_without_provider_fails() {
    let cli = parse(&["lookup", "192.0.2.1"]);
    let err = run_cli_command(cli.command).await.unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)));
}

#[tokio::test]
async fn test_config_generate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.toml");
    let path_str = path.to_string_lossy().into_owned();

    let cli = parse(&["config", "generate", path_str.as_str(), "--force"]);
    match cli.command {
        Commands::Config {
            action: ConfigCommands::Generate { ref output_path, force },
        } => {
            assert_eq!(output_path.as_deref(), Some(path_str.as_str()));
            assert!(force);
        }
        _ => panic!("expected config generate"),
    }
    run_cli_command(cli.command).await.unwrap();

    let generated = StaticConfig::try_load_from(&path_str).unwrap();
    assert_eq!(generated.cloud.timeout_secs, StaticConfig::default().cloud.timeout_secs);
}

#[tokio::test]
async fn test_config_show() {
    let cli = parse(&["config", "show", "--json"]);
    assert!(run_cli_command(cli.command).await.is_ok());
}
