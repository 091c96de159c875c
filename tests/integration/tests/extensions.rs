//! Extension registry tests.

use std::sync::Arc;

use kc_protocol_wsfed::{
    AppliesTo, ExtensionRegistry, ExtensionValue, Fault, WsTrustError,
};

use crate::common::{first_response, fixture, fixture_with, parser, parser_with, rstr_collection};

fn register_additional_tag(registry: &ExtensionRegistry) {
    registry.register_local("AdditionalTag", |stream| {
        stream.next_start_tag("AdditionalTag")?;
        if !stream.has_text_ahead()? {
            stream.expect_end_tag("AdditionalTag")?;
            return Ok(ExtensionValue::Empty);
        }
        let value = stream.element_text("AdditionalTag")?;
        Ok(ExtensionValue::AppliesTo(AppliesTo::value_of(value)))
    });
}

/// An element no extension claims is a fault.
#[test]
fn test_unknown_tag() -> anyhow::Result<()> {
    let err = first_response(&parser(), &fixture("unknown-tag.xml")?).unwrap_err();
    assert!(matches!(
        err,
        WsTrustError::Fault(Fault::UnclaimedExtension { ref name }) if name.local_part == "UnknownTag"
    ));
    Ok(())
}

/// A registered extension turns the unknown element into `applies_to`.
#[test]
fn test_unknown_tag_with_added_support() -> anyhow::Result<()> {
    let registry = Arc::new(ExtensionRegistry::with_defaults());
    register_additional_tag(&registry);

    let xml = fixture("unknown-tag.xml")?.replace("UnknownTag", "AdditionalTag");
    let resp = first_response(&parser_with(&registry), &xml)?;
    assert_eq!(
        resp.applies_to.map(|a| a.value()).as_deref(),
        Some("http://uri/unknown-tag")
    );
    Ok(())
}

/// Registration is visible to parses that start afterwards.
#[test]
fn test_registration_after_failure() -> anyhow::Result<()> {
    let xml = rstr_collection(r#"<wst:RequestSecurityTokenResponse Context="ctx"><Foo/></wst:RequestSecurityTokenResponse>"#);
    let registry = Arc::new(ExtensionRegistry::with_defaults());
    let parser = parser_with(&registry);

    assert!(parser.parse_str(&xml).unwrap_err().is_fault());

    registry.register_local("Foo", |stream| {
        stream.next_start_tag("Foo")?;
        stream.expect_end_tag("Foo")?;
        Ok(ExtensionValue::AppliesTo(AppliesTo::value_of("bar")))
    });

    let resp = first_response(&parser, &xml)?;
    assert_eq!(resp.applies_to.map(|a| a.value()).as_deref(), Some("bar"));
    Ok(())
}

/// The default `wsp:AppliesTo` handler reads the endpoint address.
#[test]
fn test_default_applies_to() -> anyhow::Result<()> {
    let payload = parser().parse_str(&fixture("applies-to.xml")?)?;
    let responses = payload.responses();
    assert_eq!(responses.len(), 2);
    assert_eq!(
        responses[0].applies_to.as_ref().map(AppliesTo::value).as_deref(),
        Some("urn:relying-party")
    );
    assert!(responses[1].applies_to.is_none());
    assert_eq!(responses[1].key_size, Some(512));
    Ok(())
}

/// A registry without defaults does not understand `wsp:AppliesTo`.
#[test]
fn test_empty_registry() -> anyhow::Result<()> {
    let registry = Arc::new(ExtensionRegistry::new());
    let err = parser_with(&registry)
        .parse_str(&fixture("applies-to.xml")?)
        .unwrap_err();
    assert!(matches!(err, WsTrustError::Fault(Fault::UnclaimedExtension { .. })));
    Ok(())
}

/// Extensions that yield fragments are consumed without touching the record.
#[test]
fn test_fragment_extension_is_discarded() -> anyhow::Result<()> {
    let registry = Arc::new(ExtensionRegistry::with_defaults());
    registry.register_local("Claims", |stream| {
        Ok(ExtensionValue::Fragment(stream.capture_element(8)?))
    });

    let xml = fixture_with(
        "minimum.xml",
        r#"<wst:RequestSecurityTokenResponse Context="context-name"/>"#,
        r#"<wst:RequestSecurityTokenResponse Context="context-name">
             <Claims><Claim Uri="urn:role"/></Claims>
             <wst:KeySize>128</wst:KeySize>
           </wst:RequestSecurityTokenResponse>"#,
    )?;
    let resp = first_response(&parser_with(&registry), &xml)?;
    assert!(resp.applies_to.is_none());
    assert_eq!(resp.key_size, Some(128));
    Ok(())
}
