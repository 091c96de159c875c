//! WS-Trust Message Parsing for Keycloak Rust WS-Federation.
//!
//! This crate parses the security token exchange payloads used by
//! WS-Federation identity providers:
//!
//! - **RequestSecurityTokenResponse** - Issued token responses, singular or
//!   as a collection
//! - **RequestSecurityToken** - Token requests, singular or as a collection
//! - **Extensions** - Runtime-registered parsers for vendor elements such as
//!   `wsp:AppliesTo`
//!
//! # Architecture
//!
//! - [`stream`] - Pull-based token cursor and the `quick-xml` tokenizer
//! - [`parser`] - Root dispatch and the request/response grammars
//! - [`registry`] - Extension parsers for elements outside the grammars
//! - [`types`] - Parsed model types
//! - [`config`] - Parser configuration
//! - [`error`] - Declared parse errors and undeclared faults
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kc_protocol_wsfed::{AppliesTo, ExtensionRegistry, ExtensionValue, WsTrustParser};
//!
//! let registry = Arc::new(ExtensionRegistry::with_defaults());
//! registry.register_local("Realm", |stream| {
//!     stream.next_start_tag("Realm")?;
//!     let realm = stream.element_text("Realm")?;
//!     Ok(ExtensionValue::AppliesTo(AppliesTo::value_of(realm)))
//! });
//!
//! let parser = WsTrustParser::new(registry);
//! let payload = parser
//!     .parse_str(
//!         r#"<RequestSecurityTokenResponseCollection>
//!              <RequestSecurityTokenResponse Context="ctx1">
//!                <Realm>urn:example</Realm>
//!              </RequestSecurityTokenResponse>
//!            </RequestSecurityTokenResponseCollection>"#,
//!     )
//!     .unwrap();
//!
//! let responses = payload.into_response_collection().unwrap();
//! assert_eq!(responses[0].applies_to.as_ref().unwrap().value(), "urn:example");
//! ```
//!
//! # Specifications
//!
//! - [WS-Trust 1.3](https://docs.oasis-open.org/ws-sx/ws-trust/200512/ws-trust-1.3-os.html)
//! - [WS-Policy Attachment](https://www.w3.org/Submission/WS-PolicyAttachment/)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod parser;
pub mod registry;
pub mod stream;
pub mod types;

pub use config::ParserConfig;
pub use error::{ErrorKind, Fault, ParseError, WsTrustError, WsTrustResult};
pub use parser::WsTrustParser;
pub use registry::{ExtensionRegistry, ExtensionValue, RegistrySnapshot};
pub use stream::{StartTag, Token, TokenStream, XmlTokenStream};
pub use types::*;
