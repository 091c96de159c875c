//! WS-Trust parsing error types.
//!
//! Failures come in two families:
//!
//! - [`ParseError`]: a recognized schema violation in a strictly validated
//!   context, such as missing required text or a malformed value, or a
//!   tokenizer failure.
//! - [`Fault`]: an unexpected tag, close or content shape in a loosely
//!   validated context, including running out of tokens.
//!
//! Callers that need to react differently to the two can match on
//! [`WsTrustError`] directly or use [`WsTrustError::kind`].

use std::num::ParseIntError;

use thiserror::Error;

use crate::types::QName;

/// Result type for WS-Trust parsing operations.
pub type WsTrustResult<T> = Result<T, WsTrustError>;

/// WS-Trust parsing errors.
#[derive(Debug, Error)]
pub enum WsTrustError {
    /// A declared parse error.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An undeclared fault.
    #[error(transparent)]
    Fault(#[from] Fault),
}

/// The family an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Schema violation in a strictly validated context.
    DeclaredParse,
    /// Unexpected shape in a loosely validated context.
    UndeclaredFault,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeclaredParse => f.write_str("declared parse error"),
            Self::UndeclaredFault => f.write_str("undeclared fault"),
        }
    }
}

impl WsTrustError {
    /// Returns the family of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::DeclaredParse,
            Self::Fault(_) => ErrorKind::UndeclaredFault,
        }
    }

    /// Returns true if this is a declared parse error.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns true if this is an undeclared fault.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }
}

/// Declared parse errors.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A required text value was missing.
    #[error("expected text value for {what}")]
    MissingText {
        /// Description of the value that was expected.
        what: &'static str,
    },

    /// A URI value could not be parsed.
    #[error("invalid URI for {what}: {source}")]
    InvalidUri {
        /// Description of the value being parsed.
        what: &'static str,
        /// The underlying URI parse failure.
        #[source]
        source: iri_string::validate::Error,
    },

    /// An integer value could not be parsed.
    #[error("invalid integer for {what}: {source}")]
    InvalidInteger {
        /// Description of the value being parsed.
        what: &'static str,
        /// The underlying conversion failure.
        #[source]
        source: ParseIntError,
    },

    /// A text-only element contained a nested element.
    #[error("expected text-only content in {within}, found element {found}")]
    TextOnly {
        /// Local name of the element being read.
        within: &'static str,
        /// Local name of the nested element.
        found: String,
    },

    /// The XML tokenizer failed.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Undeclared faults.
#[derive(Debug, Error)]
pub enum Fault {
    /// A start tag that is not allowed at this position.
    #[error("unknown tag: {tag}")]
    UnknownTag {
        /// Local name of the offending tag.
        tag: String,
    },

    /// A start or end tag other than the one the grammar requires.
    #[error("expected tag {expected}, found {found}")]
    UnexpectedTag {
        /// Local name the grammar required.
        expected: &'static str,
        /// Local name that was found.
        found: String,
    },

    /// An end tag that does not close the current construct.
    #[error("unknown end element: {tag}")]
    UnexpectedClose {
        /// Local name of the offending end tag.
        tag: String,
    },

    /// Character data where only elements are allowed.
    #[error("unexpected text content inside {within}")]
    UnexpectedText {
        /// Local name of the enclosing element.
        within: &'static str,
    },

    /// No registered extension claims the element.
    #[error("no parser registered for element {name}")]
    UnclaimedExtension {
        /// Qualified name of the element.
        name: QName,
    },

    /// A required attribute was missing.
    #[error("missing attribute {attribute} on {element}")]
    MissingAttribute {
        /// Local name of the element.
        element: &'static str,
        /// Local name of the attribute.
        attribute: &'static str,
    },

    /// The payload root is not one of the WS-Trust grammars.
    #[error("unsupported WS-Trust payload: {name}")]
    UnsupportedPayload {
        /// Root element name, or the base namespace when there is no root.
        name: String,
    },

    /// A captured fragment is nested deeper than allowed.
    #[error("element nesting exceeds maximum depth of {max_depth}")]
    DepthExceeded {
        /// The configured limit.
        max_depth: usize,
    },

    /// The token stream ended before the construct was complete.
    #[error("unexpected end of stream, expected {expected}")]
    StreamExhausted {
        /// What the parser was looking for.
        expected: &'static str,
    },
}

impl From<quick_xml::events::attributes::AttrError> for WsTrustError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::Parse(ParseError::Xml(err.into()))
    }
}

impl From<quick_xml::Error> for WsTrustError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Parse(ParseError::Xml(err))
    }
}
