//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for ipintel using clap's derive macros.

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::engine::PerformanceProfile;

/// ipintel - IP intelligence examples and utilities
#[derive(Parser)]
#[command(name = "ipintel")]
#[command(version)]
#[command(about = "IP intelligence examples: area calculation, engine configuration and lookups", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the projected area of a WKT geometry
    ///
    /// Reads the WKT from the argument, from --file, or from stdin.
    Area {
        /// WKT text, e.g. "POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))"
        wkt: Option<String>,

        /// Read WKT from a file
        #[arg(long, conflicts_with = "wkt")]
        file: Option<String>,

        /// Fail on malformed WKT instead of reporting an empty area
        #[arg(long)]
        strict: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up an IP address through the configured provider
    Lookup {
        /// IPv4 or IPv6 address
        ip: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the calls the engine settings forward to a native configuration handle
    Engine {
        /// Override the configured performance profile
        #[arg(long)]
        profile: Option<PerformanceProfile>,

        /// Override the configured concurrency
        #[arg(long)]
        concurrency: Option<u16>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Marshal a string into a native UTF-8 buffer and back
    Marshal {
        /// Text to marshal
        text: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
