//! Key material carried in requests and responses.

use serde::Serialize;

use super::Element;

/// A `BinarySecret` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinarySecret {
    /// The `Type` attribute, if present.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub secret_type: Option<String>,
    /// Raw bytes of the element text.
    pub value: Vec<u8>,
}

impl BinarySecret {
    /// Returns the value as text.
    #[must_use]
    pub fn value_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }
}

/// `Entropy` contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entropy {
    /// The binary secret, when the first child was a `BinarySecret`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_secret: Option<BinarySecret>,
}

impl Entropy {
    /// Returns true if no key material was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.binary_secret.is_none()
    }
}

/// `UseKey` contents: an `X509Certificate` or `KeyValue` fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseKey {
    /// The captured key element.
    pub any: Element,
}

/// `RequestedProofToken` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestedProofToken {
    /// A proof key delivered directly.
    BinarySecret(BinarySecret),
    /// A proof key to be computed by the requestor.
    ComputedKey {
        /// Key computation algorithm URI.
        algorithm: String,
    },
    /// The element carried no proof material.
    None,
}

impl RequestedProofToken {
    /// Returns the binary secret, if that is the variant.
    #[must_use]
    pub const fn binary_secret(&self) -> Option<&BinarySecret> {
        match self {
            Self::BinarySecret(secret) => Some(secret),
            _ => None,
        }
    }

    /// Returns the computed key algorithm, if that is the variant.
    #[must_use]
    pub fn computed_key_algorithm(&self) -> Option<&str> {
        match self {
            Self::ComputedKey { algorithm } => Some(algorithm),
            _ => None,
        }
    }
}

/// `RequestedSecurityToken` contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestedSecurityToken {
    /// The issued tokens, verbatim and in document order.
    pub any: Vec<Element>,
}

impl RequestedSecurityToken {
    /// Returns the first token fragment.
    #[must_use]
    pub fn first(&self) -> Option<&Element> {
        self.any.first()
    }
}
