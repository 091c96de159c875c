//! Payload parsing command.

use std::path::Path;

use kc_protocol_wsfed::{WsTrustParser, WsTrustPayload};
use tracing::debug;

use crate::cli::ParseArgs;
use crate::output::{output_payload, warning};
use crate::CliConfig;

/// Runs the parse command.
pub fn run_parse(args: ParseArgs, config: &CliConfig) -> crate::CliResult<()> {
    let payload = parse_file(&args.file, config)?;
    if payload.responses().iter().any(|r| r.context.is_empty()) {
        warning("response without a Context attribute");
    }
    output_payload(&payload, args.output.unwrap_or(config.output_format))
}

/// Reads and parses a payload file.
pub fn parse_file(path: &Path, config: &CliConfig) -> crate::CliResult<WsTrustPayload> {
    let xml = std::fs::read_to_string(path)?;
    debug!(file = %path.display(), bytes = xml.len(), "Parsing payload");

    let parser = WsTrustParser::default().with_config(config.parser.clone());
    Ok(parser.parse_str(&xml)?)
}
