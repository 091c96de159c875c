//! WS-Trust types and data structures.
//!
//! This module contains the in-memory model produced by the parser:
//! responses, requests, their key material and references, and the opaque
//! fragment type used for content the parser does not interpret.

mod applies_to;
mod constants;
mod element;
mod keys;
mod qname;
mod reference;
mod request;
mod response;
mod status;
mod values;

pub use applies_to::*;
pub use constants::*;
pub use element::*;
pub use keys::*;
pub use qname::*;
pub use reference::*;
pub use request::*;
pub use response::*;
pub use status::*;
pub use values::*;
