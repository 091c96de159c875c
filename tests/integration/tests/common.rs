//! Common test utilities and fixtures.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{ensure, Context};
use kc_protocol_wsfed::{
    ExtensionRegistry, ResponseToken, WsTrustParser, WsTrustPayload, WsTrustResult,
};

/// Reads a sample payload from the `fixtures` directory.
pub fn fixture(name: &str) -> anyhow::Result<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

/// Reads a sample payload and replaces one exact fragment of it.
pub fn fixture_with(name: &str, from: &str, to: &str) -> anyhow::Result<String> {
    let xml = fixture(name)?;
    ensure!(xml.contains(from), "{name} does not contain {from}");
    Ok(xml.replacen(from, to, 1))
}

/// Parser with the default extensions.
pub fn parser() -> WsTrustParser {
    WsTrustParser::default()
}

/// Parser sharing the given registry.
pub fn parser_with(registry: &Arc<ExtensionRegistry>) -> WsTrustParser {
    WsTrustParser::new(Arc::clone(registry))
}

/// Parses `xml` and returns the first response of the collection.
pub fn first_response(parser: &WsTrustParser, xml: &str) -> WsTrustResult<ResponseToken> {
    let payload = parser.parse_str(xml)?;
    Ok(into_first_response(payload))
}

/// Extracts the first response, panicking if the payload carries none.
pub fn into_first_response(payload: WsTrustPayload) -> ResponseToken {
    match payload {
        WsTrustPayload::ResponseCollection(collection) => collection
            .into_iter()
            .next()
            .unwrap_or_else(|| panic!("empty response collection")),
        WsTrustPayload::Response(response) => response,
        other => panic!("expected a response payload, found {}", other.root_name()),
    }
}

/// Wraps response bodies in a namespaced collection element.
pub fn rstr_collection(body: &str) -> String {
    format!(
        r#"<wst:RequestSecurityTokenResponseCollection xmlns:wst="{}">{body}</wst:RequestSecurityTokenResponseCollection>"#,
        kc_protocol_wsfed::WST_NS
    )
}
