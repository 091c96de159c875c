//! Extension registry for elements the core grammar does not know.
//!
//! Deployments register `(predicate, handler)` pairs; when a response or
//! request contains an element outside the built-in dispatch table, the first
//! registered extension whose predicate accepts the element's qualified name
//! parses it. Registration is append-only and lookups honour registration
//! order.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::WsTrustResult;
use crate::parser::policy::parse_applies_to;
use crate::stream::TokenStream;
use crate::types::{wsp, AppliesTo, Element, QName, WSP_NS};

/// Predicate deciding whether an extension claims an element.
pub type ExtensionPredicate = dyn Fn(&QName) -> bool + Send + Sync;

/// Handler parsing a claimed element.
///
/// The handler is invoked with the claimed start tag still unconsumed and
/// must consume the whole element.
pub type ExtensionHandler =
    dyn Fn(&mut dyn TokenStream) -> WsTrustResult<ExtensionValue> + Send + Sync;

/// Value produced by an extension handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionValue {
    /// An `AppliesTo`; stored on the request or response being parsed.
    AppliesTo(AppliesTo),
    /// A captured fragment; discarded by the built-in grammars.
    Fragment(Element),
    /// Nothing worth keeping.
    Empty,
}

/// A registered extension.
pub struct Extension {
    predicate: Box<ExtensionPredicate>,
    handler: Box<ExtensionHandler>,
}

impl Extension {
    /// Returns true if this extension claims the element.
    #[must_use]
    pub fn claims(&self, name: &QName) -> bool {
        (self.predicate)(name)
    }

    /// Runs the handler.
    ///
    /// # Errors
    ///
    /// Propagates whatever the handler returns.
    pub fn parse(&self, stream: &mut dyn TokenStream) -> WsTrustResult<ExtensionValue> {
        (self.handler)(stream)
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extension").finish_non_exhaustive()
    }
}

/// Registry of extension parsers.
///
/// Shared between parsers and threads; every parse works on a
/// [`RegistrySnapshot`] taken when it starts.
#[derive(Debug, Default)]
pub struct ExtensionRegistry {
    extensions: RwLock<Vec<Arc<Extension>>>,
}

impl ExtensionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the WS-Policy `AppliesTo` parser registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(
            |name| name.is(WSP_NS, wsp::APPLIES_TO),
            |stream| parse_applies_to(stream).map(ExtensionValue::AppliesTo),
        );
        registry
    }

    /// Registers an extension.
    ///
    /// ## Arguments
    ///
    /// * `predicate` - Decides which qualified names the extension claims
    /// * `handler` - Parses a claimed element
    pub fn register<P, H>(&self, predicate: P, handler: H)
    where
        P: Fn(&QName) -> bool + Send + Sync + 'static,
        H: Fn(&mut dyn TokenStream) -> WsTrustResult<ExtensionValue> + Send + Sync + 'static,
    {
        let extension = Extension {
            predicate: Box::new(predicate),
            handler: Box::new(handler),
        };
        self.extensions.write().push(Arc::new(extension));
    }

    /// Registers an extension claiming every element with the given local
    /// name, whatever its namespace.
    pub fn register_local<H>(&self, local_part: impl Into<String>, handler: H)
    where
        H: Fn(&mut dyn TokenStream) -> WsTrustResult<ExtensionValue> + Send + Sync + 'static,
    {
        let local_part = local_part.into();
        self.register(move |name| name.local_part == local_part, handler);
    }

    /// Returns the number of registered extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extensions.read().len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.read().is_empty()
    }

    /// Takes an immutable snapshot of the current registrations.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            extensions: self.extensions.read().clone(),
        }
    }
}

/// Registrations visible to one parse.
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    extensions: Vec<Arc<Extension>>,
}

impl RegistrySnapshot {
    /// Returns the first extension, in registration order, claiming `name`.
    #[must_use]
    pub fn lookup(&self, name: &QName) -> Option<&Extension> {
        self.extensions
            .iter()
            .map(AsRef::as_ref)
            .find(|extension| extension.claims(name))
    }

    /// Returns the number of extensions in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns true if the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}
