//! `RequestSecurityToken` grammar.

use super::body::{BodyRecord, ChildParser};
use super::leaf;
use super::ParseContext;
use crate::error::WsTrustResult;
use crate::stream::TokenStream;
use crate::types::{wst, AppliesTo, RequestSecurityToken};

static REQUEST_CHILDREN: &[(&str, ChildParser<RequestSecurityToken>)] = &[
    (wst::REQUEST_TYPE, request_type),
    (wst::TOKEN_TYPE, token_type),
    (wst::KEY_TYPE, key_type),
    (wst::LIFETIME, lifetime),
    (wst::ON_BEHALF_OF, on_behalf_of),
    (wst::KEY_SIZE, key_size),
    (wst::ENTROPY, entropy),
    (wst::USE_KEY, use_key),
    (wst::RENEWING, renewing),
    (wst::COMPUTED_KEY_ALGORITHM, computed_key_algorithm),
    (wst::SIGNATURE_ALGORITHM, signature_algorithm),
    (wst::ENCRYPTION_ALGORITHM, encryption_algorithm),
    (wst::CANONICALIZATION_ALGORITHM, canonicalization_algorithm),
    (wst::VALIDATE_TARGET, validate_target),
    (wst::RENEW_TARGET, renew_target),
    (wst::CANCEL_TARGET, cancel_target),
];

impl BodyRecord for RequestSecurityToken {
    const ELEMENT: &'static str = wst::RST;

    fn with_context(context: String) -> Self {
        Self::new(context)
    }

    fn children() -> &'static [(&'static str, ChildParser<Self>)] {
        REQUEST_CHILDREN
    }

    fn set_applies_to(&mut self, applies_to: AppliesTo) {
        self.applies_to = Some(applies_to);
    }

    fn context(&self) -> &str {
        &self.context
    }
}

/// Generates a child parser storing a required URI.
macro_rules! uri_child {
    ($name:ident, $field:ident, $element:expr, $what:literal) => {
        fn $name(
            stream: &mut dyn TokenStream,
            _: &ParseContext,
            request: &mut RequestSecurityToken,
        ) -> WsTrustResult<()> {
            request.$field = Some(leaf::parse_uri(stream, $element, $what)?);
            Ok(())
        }
    };
}

/// Generates a child parser storing a single captured fragment.
macro_rules! target_child {
    ($name:ident, $field:ident, $element:expr) => {
        fn $name(
            stream: &mut dyn TokenStream,
            ctx: &ParseContext,
            request: &mut RequestSecurityToken,
        ) -> WsTrustResult<()> {
            request.$field = Some(leaf::parse_wrapped_fragment(stream, $element, ctx.max_depth)?);
            Ok(())
        }
    };
}

uri_child!(request_type, request_type, wst::REQUEST_TYPE, "request type");
uri_child!(token_type, token_type, wst::TOKEN_TYPE, "token type");
uri_child!(key_type, key_type, wst::KEY_TYPE, "key type");
uri_child!(
    computed_key_algorithm,
    computed_key_algorithm,
    wst::COMPUTED_KEY_ALGORITHM,
    "computed key algorithm"
);
uri_child!(
    signature_algorithm,
    signature_algorithm,
    wst::SIGNATURE_ALGORITHM,
    "signature algorithm"
);
uri_child!(
    encryption_algorithm,
    encryption_algorithm,
    wst::ENCRYPTION_ALGORITHM,
    "encryption algorithm"
);
uri_child!(
    canonicalization_algorithm,
    canonicalization_algorithm,
    wst::CANONICALIZATION_ALGORITHM,
    "canonicalization algorithm"
);

target_child!(validate_target, validate_target, wst::VALIDATE_TARGET);
target_child!(renew_target, renew_target, wst::RENEW_TARGET);
target_child!(cancel_target, cancel_target, wst::CANCEL_TARGET);

fn lifetime(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    request: &mut RequestSecurityToken,
) -> WsTrustResult<()> {
    request.lifetime = Some(leaf::parse_lifetime(stream)?);
    Ok(())
}

fn on_behalf_of(
    stream: &mut dyn TokenStream,
    ctx: &ParseContext,
    request: &mut RequestSecurityToken,
) -> WsTrustResult<()> {
    request.on_behalf_of = Some(leaf::parse_on_behalf_of(stream, ctx.max_depth)?);
    Ok(())
}

fn key_size(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    request: &mut RequestSecurityToken,
) -> WsTrustResult<()> {
    request.key_size = Some(leaf::parse_integer(stream, wst::KEY_SIZE, "key size")?);
    Ok(())
}

fn entropy(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    request: &mut RequestSecurityToken,
) -> WsTrustResult<()> {
    request.entropy = Some(leaf::parse_entropy(stream)?);
    Ok(())
}

fn use_key(
    stream: &mut dyn TokenStream,
    ctx: &ParseContext,
    request: &mut RequestSecurityToken,
) -> WsTrustResult<()> {
    request.use_key = Some(leaf::parse_use_key(stream, ctx.max_depth)?);
    Ok(())
}

fn renewing(
    stream: &mut dyn TokenStream,
    _: &ParseContext,
    request: &mut RequestSecurityToken,
) -> WsTrustResult<()> {
    request.renewing = Some(leaf::parse_renewing(stream)?);
    Ok(())
}
