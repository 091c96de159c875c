//! Qualified XML names.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// A namespace-qualified element or attribute name.
///
/// Two names are equal when their namespace and local part are equal; the
/// prefix is kept only so captured fragments can be written back unchanged.
#[derive(Debug, Clone, Default)]
pub struct QName {
    /// Namespace URI, empty when the name is not in a namespace.
    pub namespace: String,
    /// Local part of the name.
    pub local_part: String,
    /// Prefix used in the source document, empty when unprefixed.
    pub prefix: String,
}

impl QName {
    /// Creates a name in the given namespace.
    #[must_use]
    pub fn new(namespace: impl Into<String>, local_part: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local_part: local_part.into(),
            prefix: String::new(),
        }
    }

    /// Creates a name that is not in any namespace.
    #[must_use]
    pub fn local(local_part: impl Into<String>) -> Self {
        Self::new(String::new(), local_part)
    }

    /// Sets the source prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Returns the name as written in the source (`prefix:local` or `local`).
    #[must_use]
    pub fn prefixed(&self) -> String {
        if self.prefix.is_empty() {
            self.local_part.clone()
        } else {
            format!("{}:{}", self.prefix, self.local_part)
        }
    }

    /// Returns true if this name has the given namespace and local part.
    #[must_use]
    pub fn is(&self, namespace: &str, local_part: &str) -> bool {
        self.namespace == namespace && self.local_part == local_part
    }
}

impl PartialEq for QName {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace && self.local_part == other.local_part
    }
}

impl Eq for QName {}

impl Hash for QName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.local_part.hash(state);
    }
}

impl PartialOrd for QName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QName {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.namespace, &self.local_part).cmp(&(&other.namespace, &other.local_part))
    }
}

/// Clark notation: `{namespace}local`, or just `local` without a namespace.
impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.local_part)
        } else {
            write!(f, "{{{}}}{}", self.namespace, self.local_part)
        }
    }
}

impl Serialize for QName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
