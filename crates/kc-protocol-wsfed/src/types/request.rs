//! WS-Trust `RequestSecurityToken` types and the top-level payload.

use serde::Serialize;

use super::{
    AppliesTo, Element, Entropy, Lifetime, OnBehalfOf, Renewing, ResponseCollection,
    ResponseToken, Uri, UseKey,
};

/// One `RequestSecurityToken`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestSecurityToken {
    /// The `Context` attribute, empty when absent.
    pub context: String,

    /// `RequestType` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<Uri>,

    /// `TokenType` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<Uri>,

    /// `KeyType` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_type: Option<Uri>,

    /// Intended relying party.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<AppliesTo>,

    /// Requested lifetime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<Lifetime>,

    /// Delegated identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<OnBehalfOf>,

    /// Requested key size in bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_size: Option<u64>,

    /// Requestor entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entropy: Option<Entropy>,

    /// Key to bind the token to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_key: Option<UseKey>,

    /// Requested renewal semantics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewing: Option<Renewing>,

    /// `ComputedKeyAlgorithm` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_key_algorithm: Option<Uri>,

    /// `SignatureAlgorithm` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<Uri>,

    /// `EncryptionAlgorithm` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<Uri>,

    /// `CanonicalizationAlgorithm` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonicalization_algorithm: Option<Uri>,

    /// Token to validate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_target: Option<Element>,

    /// Token to renew.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renew_target: Option<Element>,

    /// Token to cancel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_target: Option<Element>,
}

impl RequestSecurityToken {
    /// Creates an empty request with the given context.
    #[must_use]
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            ..Self::default()
        }
    }
}

/// A `RequestSecurityTokenCollection`, in document order.
pub type RequestCollection = Vec<RequestSecurityToken>;

/// A parsed WS-Trust payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum WsTrustPayload {
    /// `RequestSecurityToken`.
    Request(RequestSecurityToken),
    /// `RequestSecurityTokenCollection`.
    RequestCollection(RequestCollection),
    /// `RequestSecurityTokenResponse`.
    Response(ResponseToken),
    /// `RequestSecurityTokenResponseCollection`.
    ResponseCollection(ResponseCollection),
}

impl WsTrustPayload {
    /// Returns the root element name of this payload's grammar.
    #[must_use]
    pub const fn root_name(&self) -> &'static str {
        use super::wst;
        match self {
            Self::Request(_) => wst::RST,
            Self::RequestCollection(_) => wst::RST_COLLECTION,
            Self::Response(_) => wst::RSTR,
            Self::ResponseCollection(_) => wst::RSTR_COLLECTION,
        }
    }

    /// Returns the single response, if that is the payload.
    #[must_use]
    pub fn into_response(self) -> Option<ResponseToken> {
        match self {
            Self::Response(response) => Some(response),
            _ => None,
        }
    }

    /// Returns the response collection, if that is the payload.
    #[must_use]
    pub fn into_response_collection(self) -> Option<ResponseCollection> {
        match self {
            Self::ResponseCollection(collection) => Some(collection),
            _ => None,
        }
    }

    /// Returns the single request, if that is the payload.
    #[must_use]
    pub fn into_request(self) -> Option<RequestSecurityToken> {
        match self {
            Self::Request(request) => Some(request),
            _ => None,
        }
    }

    /// Returns the request collection, if that is the payload.
    #[must_use]
    pub fn into_request_collection(self) -> Option<RequestCollection> {
        match self {
            Self::RequestCollection(collection) => Some(collection),
            _ => None,
        }
    }

    /// Returns every response carried by the payload, in document order.
    #[must_use]
    pub fn responses(&self) -> Vec<&ResponseToken> {
        match self {
            Self::Response(response) => vec![response],
            Self::ResponseCollection(collection) => collection.iter().collect(),
            Self::Request(_) | Self::RequestCollection(_) => Vec::new(),
        }
    }
}
