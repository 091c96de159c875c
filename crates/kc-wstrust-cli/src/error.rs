//! CLI error types.

use kc_protocol_wsfed::{ErrorKind, WsTrustError};
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload could not be parsed.
    #[error("{kind}: {source}")]
    Parse {
        /// Error family.
        kind: ErrorKind,
        /// The parser error.
        #[source]
        source: WsTrustError,
    },
}

impl From<WsTrustError> for CliError {
    fn from(source: WsTrustError) -> Self {
        Self::Parse {
            kind: source.kind(),
            source,
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
