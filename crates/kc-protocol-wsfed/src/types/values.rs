//! Scalar values carried by WS-Trust messages.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use iri_string::types::UriReferenceStr;
use serde::Serialize;
use url::Url;

/// A URI reference validated against RFC 3986.
///
/// Relative references are accepted. The source text is kept verbatim;
/// validation does not normalize it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Uri(String);

impl Uri {
    /// Validates and wraps a URI.
    ///
    /// # Errors
    ///
    /// Returns the validation error when the text is not a well-formed URI
    /// reference.
    pub fn parse(value: impl Into<String>) -> Result<Self, iri_string::validate::Error> {
        let value = value.into();
        UriReferenceStr::new(&value)?;
        Ok(Self(value))
    }

    /// Returns the URI exactly as it appeared in the document.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the URI as a parsed (normalized) URL.
    ///
    /// Returns `None` for relative references.
    #[must_use]
    pub fn to_url(&self) -> Option<Url> {
        Url::parse(&self.0).ok()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Uri {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Uri {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An `xs:dateTime` value kept as text.
///
/// Parsing never interprets timestamps; [`Timestamp::to_datetime`] does so on
/// demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Wraps timestamp text.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the timestamp text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets the text as an instant.
    ///
    /// RFC 3339 values are honoured as written; values without a zone
    /// designator are read as UTC.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.0) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.0, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Token lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lifetime {
    /// Creation instant; unset when the first child was not `Created`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Expiry instant.
    pub expires: Timestamp,
}

impl Lifetime {
    /// Returns true if the lifetime has expired at the given instant.
    ///
    /// Returns `None` when the expiry text cannot be interpreted.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> Option<bool> {
        self.expires.to_datetime().map(|expires| expires <= now)
    }
}
