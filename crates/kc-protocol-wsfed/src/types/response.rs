//! WS-Trust `RequestSecurityTokenResponse` types.

use std::ops::Index;

use serde::Serialize;

use super::{
    AppliesTo, Entropy, Lifetime, OnBehalfOf, Renewing, RequestedProofToken, RequestedReference,
    RequestedSecurityToken, Status, Uri, UseKey,
};

/// One `RequestSecurityTokenResponse`.
///
/// Fields stay `None` until the corresponding child element has been parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseToken {
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

    /// Token lifetime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<Lifetime>,

    /// Delegated identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<OnBehalfOf>,

    /// Key size in bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_size: Option<u64>,

    /// Issuer entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entropy: Option<Entropy>,

    /// Key the token is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_key: Option<UseKey>,

    /// Whether the response reports a cancelled token.
    pub requested_token_cancelled: bool,

    /// Proof-of-possession material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_proof_token: Option<RequestedProofToken>,

    /// The issued token(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_security_token: Option<RequestedSecurityToken>,

    /// Reference to the issued token when it is attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_attached_reference: Option<RequestedReference>,

    /// Reference to the issued token when it is not attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_unattached_reference: Option<RequestedReference>,

    /// Validation status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// Renewal semantics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewing: Option<Renewing>,

    /// Intended relying party.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<AppliesTo>,
}

impl ResponseToken {
    /// Creates an empty response with the given context.
    #[must_use]
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            ..Self::default()
        }
    }
}

/// A `RequestSecurityTokenResponseCollection`, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResponseCollection {
    responses: Vec<ResponseToken>,
}

impl ResponseCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a response.
    pub fn push(&mut self, response: ResponseToken) {
        self.responses.push(response);
    }

    /// Returns the number of responses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Returns true if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Returns the response at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ResponseToken> {
        self.responses.get(index)
    }

    /// Iterates over the responses.
    pub fn iter(&self) -> std::slice::Iter<'_, ResponseToken> {
        self.responses.iter()
    }

    /// Returns the responses as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ResponseToken] {
        &self.responses
    }

    /// Consumes the collection, returning the responses.
    #[must_use]
    pub fn into_vec(self) -> Vec<ResponseToken> {
        self.responses
    }
}

impl Index<usize> for ResponseCollection {
    type Output = ResponseToken;

    fn index(&self, index: usize) -> &Self::Output {
        &self.responses[index]
    }
}

impl<'a> IntoIterator for &'a ResponseCollection {
    type Item = &'a ResponseToken;
    type IntoIter = std::slice::Iter<'a, ResponseToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ResponseCollection {
    type Item = ResponseToken;
    type IntoIter = std::vec::IntoIter<ResponseToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.responses.into_iter()
    }
}

impl From<Vec<ResponseToken>> for ResponseCollection {
    fn from(responses: Vec<ResponseToken>) -> Self {
        Self { responses }
    }
}
