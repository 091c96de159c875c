//! Parser configuration.
//!
//! Configuration can be built in code, deserialized (every field has a
//! default), or loaded from environment variables.

use serde::{Deserialize, Serialize};

/// Default nesting limit for captured fragments.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Environment variable controlling [`ParserConfig::trim_text`].
pub const ENV_TRIM_TEXT: &str = "KC_WSTRUST_TRIM_TEXT";

/// Environment variable controlling [`ParserConfig::max_depth`].
pub const ENV_MAX_DEPTH: &str = "KC_WSTRUST_MAX_DEPTH";

/// WS-Trust parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Drop whitespace-only text between elements and trim text content.
    pub trim_text: bool,

    /// Maximum element nesting accepted inside a captured fragment.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            trim_text: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by environment variable name.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(trim) = lookup(ENV_TRIM_TEXT).and_then(|v| v.parse().ok()) {
            self.trim_text = trim;
        }
        if let Some(depth) = lookup(ENV_MAX_DEPTH)
            .and_then(|v| v.parse().ok())
            .filter(|d: &usize| *d > 0)
        {
            self.max_depth = depth;
        }
        self
    }
}
