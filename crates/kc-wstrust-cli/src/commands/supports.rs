//! Namespace support check.

use kc_protocol_wsfed::{wst, QName, WsTrustParser};

use crate::output::{info, success};

/// Runs the supports command.
///
/// Unsupported namespaces are reported, not treated as failures.
pub fn run_supports(namespace: &str) -> crate::CliResult<()> {
    if is_supported(namespace) {
        success(&format!("{namespace} is handled by the WS-Trust parser"));
    } else {
        info(&format!("{namespace} is not a WS-Trust namespace"));
    }
    Ok(())
}

/// Returns true if a response in `namespace` would be accepted.
#[must_use]
pub fn is_supported(namespace: &str) -> bool {
    WsTrustParser::default().supports(&QName::new(namespace, wst::RSTR))
}
