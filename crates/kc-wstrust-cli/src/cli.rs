//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

/// kc-wstrust - WS-Trust payload inspection for Keycloak Rust.
#[derive(Debug, Parser)]
#[command(name = "kc-wstrust")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ~/.keycloak/wstrust.toml).
    #[arg(short, long, env = "KC_WSTRUST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a WS-Trust payload file.
    Parse(ParseArgs),

    /// Check whether a namespace is handled by the WS-Trust parser.
    Supports {
        /// Namespace URI.
        namespace: String,
    },
}

/// Arguments for `parse`.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Payload file.
    pub file: PathBuf,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}
