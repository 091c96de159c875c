//! WS-Trust payload parser.
//!
//! [`WsTrustParser`] identifies the payload's root element and delegates to
//! one of four grammars:
//!
//! - `RequestSecurityTokenCollection`
//! - `RequestSecurityToken`
//! - `RequestSecurityTokenResponseCollection`
//! - `RequestSecurityTokenResponse`
//!
//! ## Example
//!
//! ```
//! use kc_protocol_wsfed::WsTrustParser;
//!
//! let parser = WsTrustParser::default();
//! let payload = parser
//!     .parse_str(
//!         r#"<RequestSecurityTokenResponse Context="ctx1">
//!              <RequestType>http://x/t</RequestType>
//!            </RequestSecurityTokenResponse>"#,
//!     )
//!     .unwrap();
//! let response = payload.into_response().unwrap();
//! assert_eq!(response.context, "ctx1");
//! ```

mod body;
mod leaf;
pub(crate) mod policy;
mod reference;
mod request;
mod response;
mod status;

use std::sync::Arc;

use tracing::debug;

use crate::config::ParserConfig;
use crate::error::{Fault, WsTrustResult};
use crate::registry::{ExtensionRegistry, RegistrySnapshot};
use crate::stream::{Token, TokenStream, XmlTokenStream};
use crate::types::{wst, QName, ResponseCollection, WsTrustPayload, WST_NS};

use body::{parse_body, BodyRecord};

/// State shared by every sub-parser during one parse.
pub(crate) struct ParseContext {
    /// Extensions visible to this parse.
    pub(crate) extensions: RegistrySnapshot,
    /// Nesting limit for captured fragments.
    pub(crate) max_depth: usize,
}

impl ParseContext {
    pub(crate) fn new(extensions: RegistrySnapshot, max_depth: usize) -> Self {
        Self {
            extensions,
            max_depth,
        }
    }
}

/// WS-Trust parser.
///
/// Holds a shared [`ExtensionRegistry`]; each parse works on a snapshot of
/// the registrations taken when it starts.
#[derive(Debug, Clone)]
pub struct WsTrustParser {
    registry: Arc<ExtensionRegistry>,
    config: ParserConfig,
}

impl Default for WsTrustParser {
    fn default() -> Self {
        Self::new(Arc::new(ExtensionRegistry::with_defaults()))
    }
}

impl WsTrustParser {
    /// Creates a parser using the given registry and the default
    /// configuration.
    #[must_use]
    pub fn new(registry: Arc<ExtensionRegistry>) -> Self {
        Self {
            registry,
            config: ParserConfig::default(),
        }
    }

    /// Sets the parser configuration.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the extension registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<ExtensionRegistry> {
        &self.registry
    }

    /// Returns the parser configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns true if elements with this name belong to WS-Trust.
    ///
    /// Only the namespace is compared, exactly.
    #[must_use]
    pub fn supports(&self, name: &QName) -> bool {
        name.namespace == WST_NS
    }

    /// Parses a WS-Trust payload from XML text.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ParseError`] for malformed XML or invalid values and
    /// a [`Fault`] for unexpected structure.
    pub fn parse_str(&self, xml: &str) -> WsTrustResult<WsTrustPayload> {
        let mut stream = XmlTokenStream::with_config(xml, &self.config);
        self.parse(&mut stream)
    }

    /// Parses a WS-Trust payload from a token stream.
    ///
    /// Dispatch on the root element name ignores ASCII case; the body still
    /// has to close with the exact element name.
    ///
    /// # Errors
    ///
    /// Fails with [`Fault::UnsupportedPayload`] if there is no root element
    /// or it is not a WS-Trust grammar, otherwise with whatever the grammar
    /// reports.
    pub fn parse(&self, stream: &mut dyn TokenStream) -> WsTrustResult<WsTrustPayload> {
        let ctx = ParseContext::new(self.registry.snapshot(), self.config.max_depth);

        let Some(root) = stream.peek_start_tag()? else {
            return Err(Fault::UnsupportedPayload {
                name: WST_NS.to_string(),
            }
            .into());
        };
        let local = root.local_name();
        debug!(root = %root.name, extensions = ctx.extensions.len(), "Dispatching WS-Trust payload");

        if local.eq_ignore_ascii_case(wst::RST_COLLECTION) {
            let requests = parse_collection(stream, &ctx, wst::RST_COLLECTION)?;
            Ok(WsTrustPayload::RequestCollection(requests))
        } else if local.eq_ignore_ascii_case(wst::RST) {
            Ok(WsTrustPayload::Request(parse_body(stream, &ctx)?))
        } else if local.eq_ignore_ascii_case(wst::RSTR_COLLECTION) {
            let responses = parse_collection(stream, &ctx, wst::RSTR_COLLECTION)?;
            Ok(WsTrustPayload::ResponseCollection(ResponseCollection::from(
                responses,
            )))
        } else if local.eq_ignore_ascii_case(wst::RSTR) {
            Ok(WsTrustPayload::Response(parse_body(stream, &ctx)?))
        } else {
            Err(Fault::UnsupportedPayload {
                name: root.name.local_part,
            }
            .into())
        }
    }
}

/// Parses a collection whose members are all `T` bodies.
fn parse_collection<T: BodyRecord>(
    stream: &mut dyn TokenStream,
    ctx: &ParseContext,
    element: &'static str,
) -> WsTrustResult<Vec<T>> {
    leaf::enter(stream, element)?;
    let mut members = Vec::new();

    loop {
        let member = match stream.peek_token()? {
            Some(Token::End(name)) => {
                if name.local_part != element {
                    return Err(Fault::UnexpectedClose {
                        tag: name.local_part.clone(),
                    }
                    .into());
                }
                stream.next_token()?;
                debug!(element, members = members.len(), "Parsed WS-Trust collection");
                return Ok(members);
            }
            Some(Token::Start(tag)) => tag.name.local_part.clone(),
            Some(Token::Text(_)) => {
                stream.next_token()?;
                continue;
            }
            None => return Err(Fault::StreamExhausted { expected: element }.into()),
        };

        if member != T::ELEMENT {
            return Err(Fault::UnexpectedTag {
                expected: T::ELEMENT,
                found: member,
            }
            .into());
        }
        members.push(parse_body(stream, ctx)?);
    }
}
