//! Table-driven body loop shared by the request and response grammars.

use tracing::{debug, trace, warn};

use super::ParseContext;
use crate::error::{Fault, WsTrustResult};
use crate::registry::ExtensionValue;
use crate::stream::{Token, TokenStream};
use crate::types::{wst, AppliesTo, QName};

/// Parses one child element into the record under construction.
pub(crate) type ChildParser<T> = fn(&mut dyn TokenStream, &ParseContext, &mut T) -> WsTrustResult<()>;

/// A record produced by a body grammar.
pub(crate) trait BodyRecord: Sized + 'static {
    /// Local name of the element enclosing the body.
    const ELEMENT: &'static str;

    /// Creates an empty record carrying the `Context` attribute.
    fn with_context(context: String) -> Self;

    /// Child parsers keyed by local name.
    fn children() -> &'static [(&'static str, ChildParser<Self>)];

    /// Stores an `AppliesTo` produced by an extension.
    fn set_applies_to(&mut self, applies_to: AppliesTo);

    /// Returns the `Context` attribute value.
    fn context(&self) -> &str;
}

/// Parses a body element.
///
/// Children named in the record's table go to their parser; any other child
/// goes to the first claiming extension. If the stream ends before the
/// closing tag the record built so far is returned.
pub(crate) fn parse_body<T: BodyRecord>(
    stream: &mut dyn TokenStream,
    ctx: &ParseContext,
) -> WsTrustResult<T> {
    let start = stream.next_start_tag(T::ELEMENT)?;
    let context = start.attribute(wst::CONTEXT).unwrap_or_default();
    let mut record = T::with_context(context.to_string());

    loop {
        let child = match stream.peek_token()? {
            Some(Token::Start(tag)) => tag.clone(),
            Some(Token::End(name)) => {
                if name.local_part != T::ELEMENT {
                    return Err(Fault::UnexpectedClose {
                        tag: name.local_part.clone(),
                    }
                    .into());
                }
                stream.next_token()?;
                debug!(element = T::ELEMENT, context = record.context(), "Parsed WS-Trust body");
                return Ok(record);
            }
            Some(Token::Text(_)) => {
                stream.next_token()?;
                continue;
            }
            None => return Ok(exhausted(record)),
        };

        let parser = T::children()
            .iter()
            .find(|(name, _)| *name == child.local_name())
            .map(|(_, parser)| *parser);
        match parser {
            Some(parse_child) => parse_child(stream, ctx, &mut record)?,
            None => {
                if let Some(applies_to) = parse_extension(stream, ctx, &child.name)? {
                    record.set_applies_to(applies_to);
                }
            }
        }
    }
}

fn exhausted<T: BodyRecord>(record: T) -> T {
    warn!(
        element = T::ELEMENT,
        context = record.context(),
        "Token stream ended before closing tag, returning partial record"
    );
    record
}

/// Hands an element outside the grammar to the first claiming extension.
///
/// Returns the `AppliesTo` the extension produced, if any; other values are
/// discarded.
fn parse_extension(
    stream: &mut dyn TokenStream,
    ctx: &ParseContext,
    name: &QName,
) -> WsTrustResult<Option<AppliesTo>> {
    trace!(element = %name, "Looking for extension parser");

    let Some(extension) = ctx.extensions.lookup(name) else {
        return Err(Fault::UnclaimedExtension { name: name.clone() }.into());
    };

    match extension.parse(stream)? {
        ExtensionValue::AppliesTo(applies_to) => Ok(Some(applies_to)),
        ExtensionValue::Fragment(_) | ExtensionValue::Empty => Ok(None),
    }
}
