//! WS-Trust `Status` and `Renewing`.

use serde::Serialize;

/// Validation status returned by a validate binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Status code URI.
    pub code: String,
    /// Human readable reason.
    pub reason: String,
}

impl Status {
    /// Status code for a valid token.
    pub const VALID: &'static str = "http://docs.oasis-open.org/ws-sx/ws-trust/200512/status/valid";

    /// Status code for an invalid token.
    pub const INVALID: &'static str =
        "http://docs.oasis-open.org/ws-sx/ws-trust/200512/status/invalid";

    /// Returns true if the status reports a valid token.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.code == Self::VALID
    }
}

/// Renewal semantics of an issued token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Renewing {
    /// Whether the token may be renewed.
    pub allow: bool,
    /// Whether the token may be renewed after expiry.
    pub ok: bool,
}

impl Default for Renewing {
    fn default() -> Self {
        Self {
            allow: true,
            ok: false,
        }
    }
}
