//! WS-Policy `AppliesTo`, registered by [`ExtensionRegistry::with_defaults`].
//!
//! [`ExtensionRegistry::with_defaults`]: crate::ExtensionRegistry::with_defaults

use super::leaf::{enter, peek_child, required_text};
use crate::config::DEFAULT_MAX_DEPTH;
use crate::error::{ParseError, WsTrustResult};
use crate::stream::TokenStream;
use crate::types::{wsp, AppliesTo};

/// Parses `wsp:AppliesTo`.
///
/// A `wsa:EndpointReference` child yields its `Address`; any other child is
/// kept as a fragment; an empty element yields an empty value.
pub(crate) fn parse_applies_to(stream: &mut dyn TokenStream) -> WsTrustResult<AppliesTo> {
    enter(stream, wsp::APPLIES_TO)?;

    let applies_to = match peek_child(stream, wsp::APPLIES_TO)? {
        None => AppliesTo::value_of(""),
        Some(child) if child.local_name() == wsp::ENDPOINT_REFERENCE => {
            let address = parse_endpoint_address(stream)?;
            AppliesTo::EndpointReference { address }
        }
        Some(_) => AppliesTo::Fragment(stream.capture_element(DEFAULT_MAX_DEPTH)?),
    };

    stream.expect_end_tag(wsp::APPLIES_TO)?;
    Ok(applies_to)
}

fn parse_endpoint_address(stream: &mut dyn TokenStream) -> WsTrustResult<String> {
    enter(stream, wsp::ENDPOINT_REFERENCE)?;
    let mut address = None;
    while let Some(child) = peek_child(stream, wsp::ENDPOINT_REFERENCE)? {
        if child.local_name() == wsp::ADDRESS && address.is_none() {
            enter(stream, wsp::ADDRESS)?;
            address = Some(required_text(stream, wsp::ADDRESS, "endpoint address")?);
        } else {
            stream.skip_element()?;
        }
    }
    stream.expect_end_tag(wsp::ENDPOINT_REFERENCE)?;
    address.ok_or_else(|| {
        ParseError::MissingText {
            what: "endpoint address",
        }
        .into()
    })
}
