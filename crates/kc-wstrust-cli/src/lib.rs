//! # kc-wstrust-cli
//!
//! Command-line inspection of WS-Trust payloads for Keycloak Rust.
//!
//! This crate provides:
//! - Parsing a payload file and printing the model as JSON or a summary
//! - Checking whether a namespace belongs to WS-Trust

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::uninlined_format_args)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
