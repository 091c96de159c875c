//! WS-Policy `AppliesTo`.

use serde::Serialize;

use super::Element;

/// The relying party a token is intended for.
///
/// The default shape is a WS-Addressing endpoint reference; registered
/// extensions may produce a plain value or keep the raw fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AppliesTo {
    /// `wsa:EndpointReference/wsa:Address`.
    EndpointReference {
        /// The endpoint address.
        address: String,
    },
    /// A plain value produced by an extension.
    Value(String),
    /// Content the default handler does not interpret.
    Fragment(Element),
}

impl AppliesTo {
    /// Creates a plain-valued `AppliesTo`.
    #[must_use]
    pub fn value_of(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    /// Returns the relying party identifier carried by this value.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::EndpointReference { address } => address.clone(),
            Self::Value(value) => value.clone(),
            Self::Fragment(element) => element.text().trim().to_string(),
        }
    }
}
