//! Response collection tests over the complete sample payloads.

use kc_protocol_wsfed::{ErrorKind, Fault, ParseError, RequestedProofToken, WsTrustError};

use crate::common::{first_response, fixture, fixture_with, parser, rstr_collection};

/// Reads every field of the complete sample.
#[test]
fn test_complete_response() -> anyhow::Result<()> {
    let resp = first_response(&parser(), &fixture("complete.xml")?)?;

    assert_eq!(resp.context, "complete");
    assert_eq!(resp.request_type.as_ref().map(|u| u.as_str()), Some("http://uri/request-type"));
    assert_eq!(resp.token_type.as_ref().map(|u| u.as_str()), Some("http://uri/token-type"));
    assert_eq!(resp.key_type.as_ref().map(|u| u.as_str()), Some("http://uri/key-type"));

    let lifetime = resp.lifetime.as_ref().expect("lifetime");
    assert_eq!(
        lifetime.created.as_ref().map(|c| c.as_str()),
        Some("2002-05-30T09:00:00")
    );
    assert_eq!(lifetime.expires.as_str(), "2020-09-30T18:45:00");

    let user = resp
        .on_behalf_of
        .as_ref()
        .and_then(|o| o.username_token())
        .expect("username token");
    assert_eq!(user.id.as_deref(), Some("user-id"));
    assert_eq!(user.username, "username");

    assert_eq!(resp.key_size, Some(256));
    assert!(resp.requested_token_cancelled);

    let entropy = resp
        .entropy
        .as_ref()
        .and_then(|e| e.binary_secret.as_ref())
        .expect("entropy secret");
    assert_eq!(entropy.secret_type.as_deref(), Some("TYPE999"));
    assert_eq!(entropy.value, b"ABCDEFGH");

    let proof = resp
        .requested_proof_token
        .as_ref()
        .and_then(RequestedProofToken::binary_secret)
        .expect("proof secret");
    assert_eq!(proof.secret_type.as_deref(), Some("TYPE888"));
    assert_eq!(proof.value, b"STUVWXYZ");

    let use_key = resp.use_key.as_ref().expect("use key");
    assert!(use_key.any.to_string().contains("X509"));

    let token = resp.requested_security_token.as_ref().expect("token");
    assert!(token.first().expect("token content").to_string().contains("AnyContent"));

    let attached = resp.requested_attached_reference.as_ref().expect("attached");
    assert_eq!(
        attached.security_token_reference.other_attribute("TokenType"),
        Some("attached-tktype")
    );
    let unattached = resp.requested_unattached_reference.as_ref().expect("unattached");
    assert_eq!(
        unattached.security_token_reference.other_attribute("TokenType"),
        Some("unattached-tktype")
    );

    let status = resp.status.as_ref().expect("status");
    assert_eq!(status.code, "status.code");
    assert_eq!(status.reason, "status.reason");

    let renewing = resp.renewing.expect("renewing");
    assert!(renewing.allow);
    assert!(renewing.ok);
    Ok(())
}

/// Tests the context attribute, present and absent.
#[test]
fn test_context_attribute() -> anyhow::Result<()> {
    let resp = first_response(&parser(), &fixture("minimum.xml")?)?;
    assert_eq!(resp.context, "context-name");

    let resp = first_response(&parser(), &fixture("without-context.xml")?)?;
    assert_eq!(resp.context, "");
    Ok(())
}

/// A collection yields its responses in document order.
#[test]
fn test_collection_order() -> anyhow::Result<()> {
    let xml = rstr_collection(
        r#"<wst:RequestSecurityTokenResponse Context="one"/>
           <wst:RequestSecurityTokenResponse Context="two"/>
           <wst:RequestSecurityTokenResponse Context="three"/>"#,
    );
    let payload = parser().parse_str(&xml)?;
    let contexts: Vec<_> = payload.responses().iter().map(|r| r.context.clone()).collect();
    assert_eq!(contexts, ["one", "two", "three"]);
    Ok(())
}

/// Lifetime whose first child is not `Created` leaves it unset.
#[test]
fn test_lifetime_without_created() -> anyhow::Result<()> {
    let xml = fixture_with(
        "complete.xml",
        "<wsu:Created>2002-05-30T09:00:00</wsu:Created>",
        "<wsu:NotCreated/>",
    )?;
    let resp = first_response(&parser(), &xml)?;
    let lifetime = resp.lifetime.expect("lifetime");
    assert!(lifetime.created.is_none());
    assert_eq!(lifetime.expires.as_str(), "2020-09-30T18:45:00");
    Ok(())
}

#[test]
fn test_lifetime_without_expires() -> anyhow::Result<()> {
    let xml = fixture_with(
        "complete.xml",
        "<wsu:Expires>2020-09-30T18:45:00</wsu:Expires>",
        "<wsu:NotExpires/>",
    )?;
    let err = first_response(&parser(), &xml).unwrap_err();
    assert!(matches!(err, WsTrustError::Fault(Fault::UnknownTag { .. })));
    Ok(())
}

/// URI children without text, or with an invalid URI, are parse errors.
#[test]
fn test_uri_children_require_valid_text() -> anyhow::Result<()> {
    let cases = [
        ("<wst:RequestType>http://uri/request-type</wst:RequestType>", "<wst:RequestType/>"),
        ("<wst:TokenType>http://uri/token-type</wst:TokenType>", "<wst:TokenType/>"),
        ("<wst:KeyType>http://uri/key-type</wst:KeyType>", "<wst:KeyType/>"),
        ("<wst:KeyType>http://uri/key-type</wst:KeyType>", "<wst:KeyType>}{</wst:KeyType>"),
    ];
    for (from, to) in cases {
        let xml = fixture_with("complete.xml", from, to)?;
        let err = first_response(&parser(), &xml).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeclaredParse, "{to}");
    }
    Ok(())
}

/// Relative references are URIs; text that breaks RFC 3986 is not.
#[test]
fn test_uri_children_accept_references() -> anyhow::Result<()> {
    let from = "<wst:RequestType>http://uri/request-type</wst:RequestType>";
    let xml = fixture_with("complete.xml", from, "<wst:RequestType>/trust/Issue</wst:RequestType>")?;
    let resp = first_response(&parser(), &xml)?;
    assert_eq!(resp.request_type.as_ref().map(|u| u.as_str()), Some("/trust/Issue"));
    assert!(resp.request_type.as_ref().and_then(|u| u.to_url()).is_none());

    let xml = fixture_with("complete.xml", from, "<wst:RequestType>http://x/a b{c}</wst:RequestType>")?;
    let err = first_response(&parser(), &xml).unwrap_err();
    assert!(matches!(
        err,
        WsTrustError::Parse(ParseError::InvalidUri { what: "request type", .. })
    ));
    Ok(())
}

/// Issued tokens keep their inner whitespace when captured.
#[test]
fn test_requested_token_keeps_whitespace() -> anyhow::Result<()> {
    let token = "<Assertion ID=\"a\">\n        <Value> a b </Value>\n      </Assertion>";
    let xml = fixture_with("complete.xml", "<AnyContent>token</AnyContent>", token)?;
    let resp = first_response(&parser(), &xml)?;

    let captured = resp.requested_security_token.as_ref().expect("token");
    assert_eq!(captured.first().expect("token content").to_string(), token);
    assert_eq!(resp.key_size, Some(256));
    Ok(())
}

#[test]
fn test_key_size_errors() -> anyhow::Result<()> {
    let xml = fixture_with("complete.xml", "<wst:KeySize>256</wst:KeySize>", "<wst:KeySize/>")?;
    let err = first_response(&parser(), &xml).unwrap_err();
    assert!(matches!(
        err,
        WsTrustError::Parse(ParseError::MissingText { .. })
    ));

    let xml = fixture_with(
        "complete.xml",
        "<wst:KeySize>256</wst:KeySize>",
        "<wst:KeySize>not-a-number</wst:KeySize>",
    )?;
    let err = first_response(&parser(), &xml).unwrap_err();
    let WsTrustError::Parse(ParseError::InvalidInteger { source, .. }) = err else {
        panic!("expected an integer error");
    };
    assert_eq!(*source.kind(), std::num::IntErrorKind::InvalidDigit);
    Ok(())
}

#[test]
fn test_entropy_secret_variants() -> anyhow::Result<()> {
    let xml = fixture("complete.xml")?.replacen(" Type=\"TYPE999\"", "", 1);
    let resp = first_response(&parser(), &xml)?;
    let secret = resp.entropy.and_then(|e| e.binary_secret).expect("secret");
    assert!(secret.secret_type.is_none());
    assert_eq!(secret.value, b"ABCDEFGH");

    let xml = fixture_with(
        "complete.xml",
        r#"<wst:BinarySecret Type="TYPE999">ABCDEFGH</wst:BinarySecret>"#,
        r#"<wst:BinarySecret Type="TYPE999"></wst:BinarySecret>"#,
    )?;
    assert!(first_response(&parser(), &xml).unwrap_err().is_parse_error());

    let xml = fixture_with(
        "complete.xml",
        r#"<wst:BinarySecret Type="TYPE999">ABCDEFGH</wst:BinarySecret>"#,
        "<wst:NotABinarySecret/>",
    )?;
    let resp = first_response(&parser(), &xml)?;
    assert!(resp.entropy.expect("entropy").is_empty());
    Ok(())
}

#[test]
fn test_use_key_variants() -> anyhow::Result<()> {
    let x509 = "<ds:X509Certificate>MIICertificate</ds:X509Certificate>";

    let xml = fixture_with("complete.xml", x509, "<ds:KeyValue/>")?;
    let resp = first_response(&parser(), &xml)?;
    assert!(resp.use_key.expect("use key").any.to_string().contains("KeyValue"));

    let xml = fixture_with("complete.xml", x509, "<ds:OtherCertificate/>")?;
    assert!(first_response(&parser(), &xml).unwrap_err().is_fault());
    Ok(())
}

#[test]
fn test_computed_key_proof_token() -> anyhow::Result<()> {
    let resp = first_response(&parser(), &fixture("complete-computed-key.xml")?)?;
    let proof = resp.requested_proof_token.expect("proof token");
    assert_eq!(proof.computed_key_algorithm(), Some("Algorithm"));
    Ok(())
}

#[test]
fn test_invalid_proof_tokens() -> anyhow::Result<()> {
    let computed = "<wst:ComputedKey>Algorithm</wst:ComputedKey>";

    let xml = fixture_with(
        "complete-computed-key.xml",
        computed,
        r#"<wst:BinarySecret Type="Invalid"/>"#,
    )?;
    assert!(first_response(&parser(), &xml).unwrap_err().is_parse_error());

    let xml = fixture_with("complete-computed-key.xml", computed, "<wst:ComputedKey/>")?;
    assert!(first_response(&parser(), &xml).unwrap_err().is_parse_error());

    let xml = fixture_with("complete-computed-key.xml", computed, "<UnknownContent/>")?;
    assert!(first_response(&parser(), &xml).unwrap_err().is_fault());
    Ok(())
}

#[test]
fn test_status_errors() -> anyhow::Result<()> {
    let xml = fixture_with("complete.xml", "<wst:Code>status.code</wst:Code>", "<wst:Code/>")?;
    assert!(first_response(&parser(), &xml).unwrap_err().is_parse_error());

    let reason = "<wst:Reason>status.reason</wst:Reason>";
    let xml = fixture_with("complete.xml", reason, "<wst:Reason/>")?;
    assert!(first_response(&parser(), &xml).unwrap_err().is_parse_error());

    let xml = fixture_with("complete.xml", reason, "<wst:Unknown/>")?;
    assert!(first_response(&parser(), &xml).unwrap_err().is_fault());
    Ok(())
}

/// The parsed model serializes to JSON for inspection.
#[test]
fn test_response_serializes() -> anyhow::Result<()> {
    let payload = parser().parse_str(&fixture("minimum.xml")?)?;
    let json = serde_json::to_value(&payload)?;
    assert_eq!(json["type"], "response_collection");
    assert_eq!(json["payload"][0]["context"], "context-name");
    assert_eq!(json["payload"][0]["requested_token_cancelled"], false);
    Ok(())
}
