//! Root dispatch tests.

use kc_protocol_wsfed::{Fault, QName, WsTrustError, WsTrustPayload, WST_NS};

use crate::common::{fixture, into_first_response, parser};

#[test]
fn test_supports() {
    let parser = parser();
    assert!(!parser.supports(&QName::new("dummy", "dummy")));
    assert!(parser.supports(&QName::new(WST_NS, "RequestSecurityTokenResponseCollection")));
}

#[test]
fn test_empty_input() {
    let err = parser().parse_str("").unwrap_err();
    assert!(matches!(err, WsTrustError::Fault(Fault::UnsupportedPayload { .. })));
}

#[test]
fn test_dummy_input() {
    let err = parser().parse_str("<dummy>content</dummy>").unwrap_err();
    assert!(matches!(
        err,
        WsTrustError::Fault(Fault::UnsupportedPayload { ref name }) if name == "dummy"
    ));
}

#[test]
fn test_malformed_xml() {
    let err = parser()
        .parse_str("<RequestSecurityTokenResponse Context=ctx></RequestSecurityTokenResponse>")
        .unwrap_err();
    assert!(err.is_parse_error());
}

/// A collection member that is not a response is a fault.
#[test]
fn test_invalid_collection() -> anyhow::Result<()> {
    let err = parser().parse_str(&fixture("invalid-collection.xml")?).unwrap_err();
    assert!(matches!(
        err,
        WsTrustError::Fault(Fault::UnexpectedTag { ref found, .. }) if found == "RequestSecurityToken"
    ));
    Ok(())
}

/// A lone response is accepted without a collection wrapper.
#[test]
fn test_single_response() -> anyhow::Result<()> {
    let payload = parser().parse_str(&format!(
        r#"<wst:RequestSecurityTokenResponse xmlns:wst="{WST_NS}" Context="alone">
             <wst:KeySize>64</wst:KeySize>
           </wst:RequestSecurityTokenResponse>"#
    ))?;
    assert!(matches!(payload, WsTrustPayload::Response(_)));
    let resp = into_first_response(payload);
    assert_eq!(resp.context, "alone");
    assert_eq!(resp.key_size, Some(64));
    Ok(())
}

/// Truncated input is an error, not a partial collection.
#[test]
fn test_truncated_collection() -> anyhow::Result<()> {
    let xml = fixture("minimum.xml")?;
    let cut = xml
        .find("</wst:RequestSecurityTokenResponseCollection>")
        .expect("closing tag");
    assert!(parser().parse_str(&xml[..cut]).is_err());
    Ok(())
}
