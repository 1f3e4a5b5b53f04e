//! CLI interface module
//!
//! This module provides command-line interface functionality for ipintel.

pub mod commands;

use crate::cli::{Commands, ConfigCommands};
use commands::{config_generate, config_show, run_area, run_engine, run_lookup, run_marshal};
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// Input could not be read or understood
    ParseError(String),
    /// A command ran and failed
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::IpIntelError> for CliError {
    fn from(err: crate::errors::IpIntelError) -> Self {
        use crate::errors::IpIntelError;
        match err {
            IpIntelError::WktParse(_)
            | IpIntelError::Validation(_)
            | IpIntelError::TypeMismatch(_) => CliError::ParseError(err.to_string()),
            _ => CliError::CommandError(err.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Area {
            wkt,
            file,
            strict,
            json,
        } => run_area(wkt, file, strict, json),
        Commands::Lookup { ip, json } => run_lookup(&ip, json).await,
        Commands::Engine {
            profile,
            concurrency,
            json,
        } => run_engine(profile, concurrency, json),
        Commands::Marshal { text } => run_marshal(&text),
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
            ConfigCommands::Show { json } => config_show(json),
        },
    }
}
