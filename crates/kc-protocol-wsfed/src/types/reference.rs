//! Token references and delegation.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{wsse, Element, QName, WSU_NS};

/// A WS-Security `SecurityTokenReference`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecurityTokenReference {
    /// The `wsu:Id` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The `Usage` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// Every other attribute, keyed by qualified name.
    pub other_attributes: BTreeMap<QName, String>,
    /// Reference contents (`KeyIdentifier`, `Reference`, ...), verbatim.
    pub any: Vec<Element>,
}

impl SecurityTokenReference {
    /// Returns the value of a vendor attribute by local name.
    #[must_use]
    pub fn other_attribute(&self, local_part: &str) -> Option<&str> {
        self.other_attributes
            .iter()
            .find(|(name, _)| name.local_part == local_part)
            .map(|(_, value)| value.as_str())
    }
}

/// `RequestedAttachedReference` / `RequestedUnattachedReference` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestedReference {
    /// The wrapped reference.
    pub security_token_reference: SecurityTokenReference,
}

/// `OnBehalfOf` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnBehalfOf {
    /// The delegated identity token, verbatim.
    pub any: Element,
}

impl OnBehalfOf {
    /// Interprets the fragment as a `wsse:UsernameToken`.
    #[must_use]
    pub fn username_token(&self) -> Option<UsernameToken> {
        if self.any.local_name() != wsse::USERNAME_TOKEN {
            return None;
        }
        let username = self.any.child(wsse::USERNAME)?.text().trim().to_string();
        Some(UsernameToken {
            id: self
                .any
                .attribute_ns(WSU_NS, wsse::ID)
                .or_else(|| self.any.attribute(wsse::ID))
                .map(str::to_string),
            username,
        })
    }
}

/// A WS-Security `UsernameToken`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsernameToken {
    /// The `wsu:Id` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The user name.
    pub username: String,
}
