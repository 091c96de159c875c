//! # kc-wstrust
//!
//! Command-line inspection of WS-Trust payloads.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![allow(clippy::uninlined_format_args)]

use clap::Parser;
use kc_wstrust_cli::{
    cli::{Cli, Command},
    commands::{run_parse, run_supports},
    config::CliConfig,
    output::error,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into())
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Parse(args) => run_parse(args, &config),
        Command::Supports { namespace } => run_supports(&namespace),
    };

    if let Err(e) = result {
        error(&e.to_string());
        std::process::exit(1);
    }
}
