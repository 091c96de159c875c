//! Token streams.
//!
//! The parser consumes a pull-based sequence of [`Token`]s through the
//! [`TokenStream`] trait. [`XmlTokenStream`] produces tokens from XML text;
//! any `Peekable` iterator of tokens works as well.
//!
//! The provided cursor methods have fixed skipping semantics that every
//! sub-parser relies on: `next_start_tag` and `next_end_tag` discard whatever
//! precedes the tag they look for, including tags of the other kind.

mod xml;

use std::iter::Peekable;

pub use xml::XmlTokenStream;

use crate::error::{Fault, ParseError, WsTrustResult};
use crate::types::{Attribute, Element, Node, QName};

/// A markup token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A start tag with its attributes.
    Start(StartTag),
    /// An end tag.
    End(QName),
    /// Character data.
    Text(String),
}

impl Token {
    /// Creates a start token without attributes.
    #[must_use]
    pub fn start(name: QName) -> Self {
        Self::Start(StartTag::new(name))
    }

    /// Creates an end token.
    #[must_use]
    pub const fn end(name: QName) -> Self {
        Self::End(name)
    }

    /// Creates a text token.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// A start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    /// Qualified element name.
    pub name: QName,
    /// Attributes in document order.
    pub attributes: Vec<Attribute>,
}

impl StartTag {
    /// Creates a start tag without attributes.
    #[must_use]
    pub const fn new(name: QName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: QName, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Returns the local part of the tag name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.name.local_part
    }

    /// Returns the value of an attribute that is not in any namespace.
    #[must_use]
    pub fn attribute(&self, local_part: &str) -> Option<&str> {
        self.attribute_ns("", local_part)
    }

    /// Returns the value of a namespaced attribute.
    #[must_use]
    pub fn attribute_ns(&self, namespace: &str, local_part: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.is(namespace, local_part))
            .map(|a| a.value.as_str())
    }

    /// Fails with [`Fault::UnexpectedTag`] unless the local name matches.
    ///
    /// # Errors
    ///
    /// Returns a fault naming both tags on mismatch.
    pub fn expect(&self, local_part: &'static str) -> WsTrustResult<()> {
        expect_name(&self.name, local_part)
    }
}

impl From<StartTag> for Element {
    fn from(tag: StartTag) -> Self {
        Self {
            name: tag.name,
            attributes: tag.attributes,
            children: Vec::new(),
        }
    }
}

/// Fails with [`Fault::UnexpectedTag`] unless `name` has the given local part.
pub(crate) fn expect_name(name: &QName, local_part: &'static str) -> WsTrustResult<()> {
    if name.local_part == local_part {
        Ok(())
    } else {
        Err(Fault::UnexpectedTag {
            expected: local_part,
            found: name.local_part.clone(),
        }
        .into())
    }
}

/// A pull-based cursor over markup tokens.
///
/// Implementors provide one-token lookahead ([`TokenStream::peek_token`]) and
/// consumption ([`TokenStream::next_token`]); everything else is built on
/// those two.
pub trait TokenStream {
    /// Returns the next token without consuming it.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the underlying tokenizer fails.
    fn peek_token(&mut self) -> WsTrustResult<Option<&Token>>;

    /// Consumes and returns the next token.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the underlying tokenizer fails.
    fn next_token(&mut self) -> WsTrustResult<Option<Token>>;

    /// Discards tokens up to the next start tag and consumes it.
    ///
    /// # Errors
    ///
    /// Fails with [`Fault::StreamExhausted`] if no start tag remains.
    fn next_start_tag(&mut self, expected: &'static str) -> WsTrustResult<StartTag> {
        loop {
            match self.next_token()? {
                Some(Token::Start(tag)) => return Ok(tag),
                Some(_) => {}
                None => return Err(Fault::StreamExhausted { expected }.into()),
            }
        }
    }

    /// Discards non-start tokens and returns the next start tag unconsumed.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the underlying tokenizer fails.
    fn peek_start_tag(&mut self) -> WsTrustResult<Option<StartTag>> {
        loop {
            match self.peek_token()? {
                Some(Token::Start(tag)) => return Ok(Some(tag.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
            self.next_token()?;
        }
    }

    /// Discards tokens up to the next end tag and consumes it.
    ///
    /// # Errors
    ///
    /// Fails with [`Fault::StreamExhausted`] if no end tag remains.
    fn next_end_tag(&mut self, expected: &'static str) -> WsTrustResult<QName> {
        loop {
            match self.next_token()? {
                Some(Token::End(name)) => return Ok(name),
                Some(_) => {}
                None => return Err(Fault::StreamExhausted { expected }.into()),
            }
        }
    }

    /// Consumes the next end tag and checks its local name.
    ///
    /// # Errors
    ///
    /// Fails with a fault if the stream ends or the name differs.
    fn expect_end_tag(&mut self, local_part: &'static str) -> WsTrustResult<()> {
        let name = self.next_end_tag(local_part)?;
        expect_name(&name, local_part)
    }

    /// Returns true if the next token is character data.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the underlying tokenizer fails.
    fn has_text_ahead(&mut self) -> WsTrustResult<bool> {
        Ok(matches!(self.peek_token()?, Some(Token::Text(_))))
    }

    /// Reads the text content of the current element and consumes its end
    /// tag. The start tag must already have been consumed.
    ///
    /// The result is trimmed; an element without text yields an empty string.
    ///
    /// # Errors
    ///
    /// Fails with a parse error if a nested element is found, or a fault if
    /// the stream ends first.
    fn element_text(&mut self, within: &'static str) -> WsTrustResult<String> {
        let mut text = String::new();
        loop {
            match self.next_token()? {
                Some(Token::Text(t)) => text.push_str(&t),
                Some(Token::End(_)) => return Ok(text.trim().to_string()),
                Some(Token::Start(tag)) => {
                    return Err(ParseError::TextOnly {
                        within,
                        found: tag.name.local_part,
                    }
                    .into())
                }
                None => return Err(Fault::StreamExhausted { expected: within }.into()),
            }
        }
    }

    /// Consumes one complete element, start tag through matching end tag.
    /// Tokens preceding the start tag are discarded.
    ///
    /// # Errors
    ///
    /// Fails with [`Fault::StreamExhausted`] if the element is not closed.
    fn skip_element(&mut self) -> WsTrustResult<()> {
        self.next_start_tag("element")?;
        let mut depth = 1_usize;
        while depth > 0 {
            match self.next_token()? {
                Some(Token::Start(_)) => depth += 1,
                Some(Token::End(_)) => depth -= 1,
                Some(Token::Text(_)) => {}
                None => return Err(Fault::StreamExhausted { expected: "end tag" }.into()),
            }
        }
        Ok(())
    }

    /// Switches verbatim text reporting on or off.
    ///
    /// While on, text is reported exactly as written, whitespace included,
    /// whatever trimming the stream otherwise applies. Streams that never
    /// alter text can ignore this.
    fn preserve_text(&mut self, _preserve: bool) {}

    /// Captures the next element as an opaque fragment.
    ///
    /// The next token must be a start tag. Text inside the fragment is kept
    /// verbatim. Elements nested deeper than `max_depth` are refused.
    ///
    /// # Errors
    ///
    /// Fails with a fault if the next token is not a start tag, the element
    /// is not closed, or it is nested too deeply.
    fn capture_element(&mut self, max_depth: usize) -> WsTrustResult<Element> {
        let root = match self.next_token()? {
            Some(Token::Start(tag)) => Element::from(tag),
            Some(Token::End(name)) => {
                return Err(Fault::UnexpectedClose {
                    tag: name.local_part,
                }
                .into())
            }
            Some(Token::Text(_)) => {
                return Err(Fault::UnexpectedText {
                    within: "captured fragment",
                }
                .into())
            }
            None => return Err(Fault::StreamExhausted { expected: "element" }.into()),
        };

        self.preserve_text(true);
        let captured = capture_children(self, root, max_depth);
        self.preserve_text(false);
        captured
    }
}

fn capture_children<S>(stream: &mut S, root: Element, max_depth: usize) -> WsTrustResult<Element>
where
    S: TokenStream + ?Sized,
{
    let mut stack = vec![root];
    loop {
        match stream.next_token()? {
            Some(Token::Start(tag)) => {
                if stack.len() >= max_depth {
                    return Err(Fault::DepthExceeded { max_depth }.into());
                }
                stack.push(Element::from(tag));
            }
            Some(Token::Text(text)) => {
                if let Some(current) = stack.last_mut() {
                    current.children.push(Node::Text(text));
                }
            }
            Some(Token::End(_)) => {
                if let Some(done) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(Node::Element(done)),
                        None => return Ok(done),
                    }
                }
            }
            None => return Err(Fault::StreamExhausted { expected: "end tag" }.into()),
        }
    }
}

impl<I> TokenStream for Peekable<I>
where
    I: Iterator<Item = Token>,
{
    fn peek_token(&mut self) -> WsTrustResult<Option<&Token>> {
        Ok(self.peek())
    }

    fn next_token(&mut self) -> WsTrustResult<Option<Token>> {
        Ok(self.next())
    }
}
