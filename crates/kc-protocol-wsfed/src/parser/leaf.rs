//! Leaf value parsers shared by the request and response grammars.
//!
//! Each parser is entered with the stream positioned before the element it
//! reads and leaves it positioned after the element's end tag.

use crate::error::{Fault, ParseError, WsTrustResult};
use crate::stream::{StartTag, Token, TokenStream};
use crate::types::{
    wst, BinarySecret, Element, Entropy, Lifetime, OnBehalfOf, Renewing, RequestedProofToken,
    RequestedSecurityToken, Timestamp, Uri, UseKey,
};

/// Returns the next child start tag of the current element without
/// consuming it, or `None` when the element's end tag comes first.
///
/// Character data before the child is discarded.
pub(crate) fn peek_child(
    stream: &mut dyn TokenStream,
    within: &'static str,
) -> WsTrustResult<Option<StartTag>> {
    loop {
        match stream.peek_token()? {
            Some(Token::Start(tag)) => return Ok(Some(tag.clone())),
            Some(Token::End(_)) => return Ok(None),
            Some(Token::Text(_)) => {}
            None => return Err(Fault::StreamExhausted { expected: within }.into()),
        }
        stream.next_token()?;
    }
}

/// Consumes the next start tag and checks its local name.
pub(crate) fn enter(stream: &mut dyn TokenStream, element: &'static str) -> WsTrustResult<StartTag> {
    let tag = stream.next_start_tag(element)?;
    tag.expect(element)?;
    Ok(tag)
}

/// Reads non-empty text up to the current element's end tag.
pub(crate) fn required_text(
    stream: &mut dyn TokenStream,
    within: &'static str,
    what: &'static str,
) -> WsTrustResult<String> {
    if !stream.has_text_ahead()? {
        return Err(ParseError::MissingText { what }.into());
    }
    let text = stream.element_text(within)?;
    if text.is_empty() {
        return Err(ParseError::MissingText { what }.into());
    }
    Ok(text)
}

/// Parses a required-text element holding an absolute URI.
pub(crate) fn parse_uri(
    stream: &mut dyn TokenStream,
    element: &'static str,
    what: &'static str,
) -> WsTrustResult<Uri> {
    stream.next_start_tag(element)?;
    let text = required_text(stream, element, what)?;
    Uri::parse(text).map_err(|source| ParseError::InvalidUri { what, source }.into())
}

/// Parses a required-text element holding an unsigned integer.
pub(crate) fn parse_integer(
    stream: &mut dyn TokenStream,
    element: &'static str,
    what: &'static str,
) -> WsTrustResult<u64> {
    stream.next_start_tag(element)?;
    let text = required_text(stream, element, what)?;
    text.parse()
        .map_err(|source| ParseError::InvalidInteger { what, source }.into())
}

/// Parses `Lifetime`.
///
/// `Created` is only recognized as the first child. When the first child has
/// another name it is consumed without being read and the following start
/// tag must be `Expires`.
pub(crate) fn parse_lifetime(stream: &mut dyn TokenStream) -> WsTrustResult<Lifetime> {
    enter(stream, wst::LIFETIME)?;

    let first = stream.next_start_tag(wst::CREATED)?;
    let created = if first.local_name() == wst::CREATED {
        Some(Timestamp::new(stream.element_text(wst::CREATED)?))
    } else {
        None
    };

    let tag = stream.next_start_tag(wst::EXPIRES)?;
    if tag.local_name() != wst::EXPIRES {
        return Err(Fault::UnknownTag {
            tag: tag.name.local_part,
        }
        .into());
    }
    let expires = Timestamp::new(required_text(stream, wst::EXPIRES, "lifetime expiry")?);

    stream.expect_end_tag(wst::LIFETIME)?;
    Ok(Lifetime { created, expires })
}

/// Parses a `BinarySecret`; the element text is kept as raw bytes.
pub(crate) fn parse_binary_secret(
    stream: &mut dyn TokenStream,
    type_required: bool,
) -> WsTrustResult<BinarySecret> {
    let tag = enter(stream, wst::BINARY_SECRET)?;
    let secret_type = tag.attribute(wst::TYPE).map(str::to_string);
    if type_required && secret_type.is_none() {
        return Err(Fault::MissingAttribute {
            element: wst::BINARY_SECRET,
            attribute: wst::TYPE,
        }
        .into());
    }
    let value = required_text(stream, wst::BINARY_SECRET, "binary secret value")?;
    Ok(BinarySecret {
        secret_type,
        value: value.into_bytes(),
    })
}

/// Parses `Entropy`. A child other than `BinarySecret` is skipped.
pub(crate) fn parse_entropy(stream: &mut dyn TokenStream) -> WsTrustResult<Entropy> {
    enter(stream, wst::ENTROPY)?;
    let mut entropy = Entropy::default();
    match peek_child(stream, wst::ENTROPY)? {
        Some(child) if child.local_name() == wst::BINARY_SECRET => {
            entropy.binary_secret = Some(parse_binary_secret(stream, false)?);
        }
        Some(_) => stream.skip_element()?,
        None => {}
    }
    stream.expect_end_tag(wst::ENTROPY)?;
    Ok(entropy)
}

/// Parses `UseKey`, which must wrap an `X509Certificate` or `KeyValue`.
pub(crate) fn parse_use_key(stream: &mut dyn TokenStream, max_depth: usize) -> WsTrustResult<UseKey> {
    enter(stream, wst::USE_KEY)?;
    match peek_child(stream, wst::USE_KEY)? {
        Some(child)
            if child.local_name() == wst::X509_CERTIFICATE
                || child.local_name() == wst::KEY_VALUE => {}
        Some(child) => {
            return Err(Fault::UnknownTag {
                tag: child.name.local_part,
            }
            .into())
        }
        None => {
            return Err(Fault::UnexpectedClose {
                tag: wst::USE_KEY.to_string(),
            }
            .into())
        }
    }
    let any = stream.capture_element(max_depth)?;
    stream.expect_end_tag(wst::USE_KEY)?;
    Ok(UseKey { any })
}

/// Parses `RequestedProofToken`.
pub(crate) fn parse_proof_token(stream: &mut dyn TokenStream) -> WsTrustResult<RequestedProofToken> {
    enter(stream, wst::REQUESTED_PROOF_TOKEN)?;
    let proof = match peek_child(stream, wst::REQUESTED_PROOF_TOKEN)? {
        None => RequestedProofToken::None,
        Some(child) if child.local_name() == wst::BINARY_SECRET => {
            RequestedProofToken::BinarySecret(parse_binary_secret(stream, true)?)
        }
        Some(child) if child.local_name() == wst::COMPUTED_KEY => {
            stream.next_start_tag(wst::COMPUTED_KEY)?;
            let algorithm = required_text(stream, wst::COMPUTED_KEY, "computed key algorithm")?;
            RequestedProofToken::ComputedKey { algorithm }
        }
        Some(child) => {
            return Err(Fault::UnknownTag {
                tag: child.name.local_part,
            }
            .into())
        }
    };
    stream.expect_end_tag(wst::REQUESTED_PROOF_TOKEN)?;
    Ok(proof)
}

/// Parses `RequestedSecurityToken`, capturing every child in order.
pub(crate) fn parse_requested_token(
    stream: &mut dyn TokenStream,
    max_depth: usize,
) -> WsTrustResult<RequestedSecurityToken> {
    enter(stream, wst::REQUESTED_TOKEN)?;
    let mut token = RequestedSecurityToken::default();
    loop {
        let closing = match stream.peek_token()? {
            Some(Token::End(name)) => Some(name.local_part.clone()),
            Some(Token::Start(_)) => None,
            Some(Token::Text(_)) => {
                stream.next_token()?;
                continue;
            }
            None => {
                return Err(Fault::StreamExhausted {
                    expected: wst::REQUESTED_TOKEN,
                }
                .into())
            }
        };
        match closing {
            Some(tag) if tag == wst::REQUESTED_TOKEN => {
                stream.next_token()?;
                return Ok(token);
            }
            Some(tag) => return Err(Fault::UnexpectedClose { tag }.into()),
            None => token.any.push(stream.capture_element(max_depth)?),
        }
    }
}

/// Parses a wrapper element holding exactly one captured child, such as
/// `OnBehalfOf` or `ValidateTarget`.
pub(crate) fn parse_wrapped_fragment(
    stream: &mut dyn TokenStream,
    element: &'static str,
    max_depth: usize,
) -> WsTrustResult<Element> {
    enter(stream, element)?;
    if peek_child(stream, element)?.is_none() {
        return Err(Fault::UnexpectedClose {
            tag: element.to_string(),
        }
        .into());
    }
    let fragment = stream.capture_element(max_depth)?;
    stream.expect_end_tag(element)?;
    Ok(fragment)
}

/// Parses `OnBehalfOf`.
pub(crate) fn parse_on_behalf_of(
    stream: &mut dyn TokenStream,
    max_depth: usize,
) -> WsTrustResult<OnBehalfOf> {
    let any = parse_wrapped_fragment(stream, wst::ON_BEHALF_OF, max_depth)?;
    Ok(OnBehalfOf { any })
}

/// Parses `Renewing`. Flags compare to "true" ignoring ASCII case; `Allow`
/// defaults to true and `OK` to false.
pub(crate) fn parse_renewing(stream: &mut dyn TokenStream) -> WsTrustResult<Renewing> {
    let tag = enter(stream, wst::RENEWING)?;
    let flag = |name: &str| tag.attribute(name).map(|v: &str| v.eq_ignore_ascii_case("true"));
    let renewing = Renewing {
        allow: flag(wst::ALLOW).unwrap_or(true),
        ok: flag(wst::OK).unwrap_or(false),
    };
    stream.expect_end_tag(wst::RENEWING)?;
    Ok(renewing)
}
