//! `RequestSecurityTokenResponse` grammar.

use super::body::{BodyRecord, ChildParser};
use super::leaf;
use super::reference::parse_requested_reference;
use super::status::parse_status;
use super::ParseContext;
use crate::error::WsTrustResult;
use crate::stream::TokenStream;
use crate::types::{wst, AppliesTo, ResponseToken};

static RESPONSE_CHILDREN: &[(&str, ChildParser<ResponseToken>)] = &[
    (wst::REQUEST_TYPE, request_type),
    (wst::TOKEN_TYPE, token_type),
    (wst::KEY_TYPE, key_type),
    (wst::LIFETIME, lifetime),
    (wst::ON_BEHALF_OF, on_behalf_of),
    (wst::KEY_SIZE, key_size),
    (wst::ENTROPY, entropy),
    (wst::USE_KEY, use_key),
    (wst::REQUESTED_TOKEN_CANCELLED, requested_token_cancelled),
    (wst::REQUESTED_PROOF_TOKEN, requested_proof_token),
    (wst::REQUESTED_TOKEN, requested_security_token),
    (wst::REQUESTED_ATTACHED_REFERENCE, requested_attached_reference),
    (wst::REQUESTED_UNATTACHED_REFERENCE, requested_unattached_reference),
    (wst::STATUS, status),
    (wst::RENEWING, renewing),
];

impl BodyRecord for ResponseToken {
    const ELEMENT: &'static str = wst::RSTR;

    fn with_context(context: String) -> Self {
        Self::new(context)
    }

    fn children() -> &'static [(&'static str, ChildParser<Self>)] {
        RESPONSE_CHILDREN
    }

    fn set_applies_to(&mut self, applies_to: AppliesTo) {
        self.applies_to = Some(applies_to);
    }

    fn context(&self) -> &str {
        &self.context
    }
}

fn request_type(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    token.request_type = Some(leaf::parse_uri(stream, wst::REQUEST_TYPE, "request type")?);
    Ok(())
}

fn token_type(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    token.token_type = Some(leaf::parse_uri(stream, wst::TOKEN_TYPE, "token type")?);
    Ok(())
}

fn key_type(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    token.key_type = Some(leaf::parse_uri(stream, wst::KEY_TYPE, "key type")?);
    Ok(())
}

fn lifetime(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    token.lifetime = Some(leaf::parse_lifetime(stream)?);
    Ok(())
}

fn on_behalf_of(
    stream: &mut dyn TokenStream,
    ctx: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    token.on_behalf_of = Some(leaf::parse_on_behalf_of(stream, ctx.max_depth)?);
    Ok(())
}

fn key_size(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    token.key_size = Some(leaf::parse_integer(stream, wst::KEY_SIZE, "key size")?);
    Ok(())
}

fn entropy(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    token.entropy = Some(leaf::parse_entropy(stream)?);
    Ok(())
}

fn use_key(
    stream: &mut dyn TokenStream,
    ctx: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    token.use_key = Some(leaf::parse_use_key(stream, ctx.max_depth)?);
    Ok(())
}

fn requested_token_cancelled(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    stream.skip_element()?;
    token.requested_token_cancelled = true;
    Ok(())
}

fn requested_proof_token(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    token.requested_proof_token = Some(leaf::parse_proof_token(stream)?);
    Ok(())
}

fn requested_security_token(
    stream: &mut dyn TokenStream,
    ctx: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    token.requested_security_token = Some(leaf::parse_requested_token(stream, ctx.max_depth)?);
    Ok(())
}

fn requested_attached_reference(
    stream: &mut dyn TokenStream,
    ctx: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    let reference =
        parse_requested_reference(stream, wst::REQUESTED_ATTACHED_REFERENCE, ctx.max_depth)?;
    token.requested_attached_reference = Some(reference);
    Ok(())
}

fn requested_unattached_reference(
    stream: &mut dyn TokenStream,
    ctx: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    let reference =
        parse_requested_reference(stream, wst::REQUESTED_UNATTACHED_REFERENCE, ctx.max_depth)?;
    token.requested_unattached_reference = Some(reference);
    Ok(())
}

fn status(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    token.status = Some(parse_status(stream)?);
    Ok(())
}

fn renewing(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    token: &mut ResponseToken,
) -> WsTrustResult<()> {
    token.renewing = Some(leaf::parse_renewing(stream)?);
    Ok(())
}
