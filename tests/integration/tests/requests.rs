//! Request payload tests.

use kc_protocol_wsfed::{request_types, AppliesTo, WsTrustPayload, WST_NS};

use crate::common::{fixture, parser};

#[test]
fn test_request() -> anyhow::Result<()> {
    let payload = parser().parse_str(&fixture("request.xml")?)?;
    let WsTrustPayload::Request(request) = payload else {
        panic!("expected a request");
    };

    assert_eq!(request.context, "request");
    assert_eq!(
        request.request_type.as_ref().map(|u| u.as_str()),
        Some(request_types::ISSUE)
    );
    assert_eq!(
        request.applies_to.as_ref().map(AppliesTo::value).as_deref(),
        Some("urn:relying-party")
    );
    assert_eq!(request.key_size, Some(256));
    assert_eq!(
        request.computed_key_algorithm.as_ref().map(|u| u.as_str()),
        Some("http://docs.oasis-open.org/ws-sx/ws-trust/200512/CK/PSHA1")
    );
    let renewing = request.renewing.expect("renewing");
    assert!(!renewing.allow);
    assert!(!renewing.ok);
    let target = request.cancel_target.as_ref().expect("cancel target");
    assert_eq!(target.local_name(), "TokenReference");
    assert_eq!(target.text(), "token-1");
    Ok(())
}

#[test]
fn test_request_collection() -> anyhow::Result<()> {
    let xml = format!(
        r#"<wst:RequestSecurityTokenCollection xmlns:wst="{WST_NS}">
             <wst:RequestSecurityToken Context="a"><wst:KeySize>1</wst:KeySize></wst:RequestSecurityToken>
             <wst:RequestSecurityToken Context="b"/>
           </wst:RequestSecurityTokenCollection>"#
    );
    let requests = parser()
        .parse_str(&xml)?
        .into_request_collection()
        .expect("request collection");
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].key_size, Some(1));
    assert_eq!(requests[1].context, "b");
    Ok(())
}

#[test]
fn test_request_rejects_invalid_request_type() -> anyhow::Result<()> {
    let xml = fixture("request.xml")?.replacen(
        "http://docs.oasis-open.org/ws-sx/ws-trust/200512/Issue",
        "not a uri",
        1,
    );
    assert!(parser().parse_str(&xml).unwrap_err().is_parse_error());
    Ok(())
}
