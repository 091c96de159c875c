//! XML tokenizer backed by `quick-xml`.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use super::{StartTag, Token, TokenStream};
use crate::config::ParserConfig;
use crate::error::WsTrustResult;
use crate::types::{Attribute, QName, XMLNS_NS};

/// A [`TokenStream`] over an XML document.
///
/// Element and attribute names are namespace-resolved. Empty elements are
/// reported as a start tag followed by an end tag; comments, processing
/// instructions and declarations are skipped; CDATA is reported as text.
///
/// With [`ParserConfig::trim_text`] set, text is trimmed and whitespace-only
/// text dropped, except inside captured fragments.
pub struct XmlTokenStream<'a> {
    reader: NsReader<&'a [u8]>,
    peeked: Option<Token>,
    finished: bool,
    trim_text: bool,
    verbatim: bool,
}

impl<'a> XmlTokenStream<'a> {
    /// Creates a stream with the default configuration.
    #[must_use]
    pub fn new(xml: &'a str) -> Self {
        Self::with_config(xml, &ParserConfig::default())
    }

    /// Creates a stream honouring the tokenizer settings of `config`.
    #[must_use]
    pub fn with_config(xml: &'a str, config: &ParserConfig) -> Self {
        let mut reader = NsReader::from_str(xml);
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            peeked: None,
            finished: false,
            trim_text: config.trim_text,
            verbatim: false,
        }
    }

    fn pull(&mut self) -> WsTrustResult<Option<Token>> {
        while !self.finished {
            let (namespace, event) = {
                let (ns, event) = self.reader.read_resolved_event()?;
                (namespace_of(&ns), event)
            };

            match event {
                Event::Start(start) => {
                    return Ok(Some(Token::Start(self.start_tag(namespace, &start)?)));
                }
                Event::End(end) => {
                    let name = qname(namespace, end.name().prefix(), end.local_name().as_ref());
                    return Ok(Some(Token::End(name)));
                }
                Event::Text(text) => {
                    let text = text.unescape()?;
                    let text = if self.trim_text && !self.verbatim {
                        text.trim()
                    } else {
                        text.as_ref()
                    };
                    if !text.is_empty() {
                        return Ok(Some(Token::Text(text.to_string())));
                    }
                }
                Event::CData(cdata) => {
                    let text = utf8(&cdata.into_inner());
                    return Ok(Some(Token::Text(text)));
                }
                Event::Eof => self.finished = true,
                _ => {}
            }
        }
        Ok(None)
    }

    fn start_tag(&self, namespace: String, start: &BytesStart<'_>) -> WsTrustResult<StartTag> {
        let name = qname(
            namespace,
            start.name().prefix(),
            start.local_name().as_ref(),
        );
        let mut tag = StartTag::new(name);

        for attr in start.attributes() {
            let attr = attr?;
            let key = attr.key.as_ref();
            let name = if key == b"xmlns" {
                QName::new(XMLNS_NS, "xmlns")
            } else if let Some(declared) = key.strip_prefix(b"xmlns:") {
                QName::new(XMLNS_NS, utf8(declared)).with_prefix("xmlns")
            } else {
                let (ns, local) = self.reader.resolve_attribute(attr.key);
                qname(namespace_of(&ns), attr.key.prefix(), local.as_ref())
            };
            let value = attr.unescape_value()?.into_owned();
            tag.attributes.push(Attribute::new(name, value));
        }

        Ok(tag)
    }
}

impl TokenStream for XmlTokenStream<'_> {
    fn peek_token(&mut self) -> WsTrustResult<Option<&Token>> {
        if self.peeked.is_none() {
            self.peeked = self.pull()?;
        }
        Ok(self.peeked.as_ref())
    }

    fn next_token(&mut self) -> WsTrustResult<Option<Token>> {
        match self.peeked.take() {
            Some(token) => Ok(Some(token)),
            None => self.pull(),
        }
    }

    fn preserve_text(&mut self, preserve: bool) {
        self.verbatim = preserve;
    }
}

fn namespace_of(result: &ResolveResult<'_>) -> String {
    match result {
        ResolveResult::Bound(ns) => utf8(ns.as_ref()),
        ResolveResult::Unbound | ResolveResult::Unknown(_) => String::new(),
    }
}

fn qname<P: AsRef<[u8]>>(namespace: String, prefix: Option<P>, local: &[u8]) -> QName {
    let prefix = prefix.map(|p| utf8(p.as_ref())).unwrap_or_default();
    QName::new(namespace, utf8(local)).with_prefix(prefix)
}

fn utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_DEPTH;
    use crate::types::WST_NS;

    fn tokens(xml: &str) -> Vec<Token> {
        let mut stream = XmlTokenStream::new(xml);
        let mut out = Vec::new();
        while let Some(token) = stream.next_token().unwrap() {
            out.push(token);
        }
        out
    }

    #[test]
    fn resolves_namespaces_and_prefixes() {
        let out = tokens(&format!(
            r#"<t:RequestType xmlns:t="{WST_NS}">http://x/t</t:RequestType>"#
        ));
        let Token::Start(start) = &out[0] else {
            panic!("expected start tag, got {:?}", out[0]);
        };
        assert_eq!(start.name, QName::new(WST_NS, "RequestType"));
        assert_eq!(start.name.prefix, "t");
        assert_eq!(start.attributes[0].name.prefixed(), "xmlns:t");
        assert_eq!(out[1], Token::text("http://x/t"));
        assert_eq!(out[2], Token::end(QName::new(WST_NS, "RequestType")));
    }

    #[test]
    fn default_namespace_applies_to_elements_not_attributes() {
        let out = tokens(&format!(
            r#"<RequestSecurityTokenResponse xmlns="{WST_NS}" Context="ctx"/>"#
        ));
        let Token::Start(start) = &out[0] else {
            panic!("expected start tag");
        };
        assert_eq!(start.name.namespace, WST_NS);
        assert_eq!(start.attribute("Context"), Some("ctx"));
    }

    #[test]
    fn expands_empty_elements() {
        let out = tokens("<A><B/></A>");
        assert_eq!(
            out,
            vec![
                Token::start(QName::local("A")),
                Token::start(QName::local("B")),
                Token::end(QName::local("B")),
                Token::end(QName::local("A")),
            ]
        );
    }

    #[test]
    fn drops_whitespace_comments_and_declarations() {
        let out = tokens("<?xml version=\"1.0\"?>\n<!-- c -->\n<A>\n  <B>x &amp; y</B>\n</A>\n");
        assert_eq!(out.len(), 5);
        assert_eq!(out[2], Token::text("x & y"));
    }

    #[test]
    fn cdata_is_text() {
        let out = tokens("<A><![CDATA[<raw>]]></A>");
        assert_eq!(out[1], Token::text("<raw>"));
    }

    #[test]
    fn keeps_whitespace_when_trimming_is_off() {
        let config = ParserConfig {
            trim_text: false,
            ..ParserConfig::default()
        };
        let mut stream = XmlTokenStream::with_config("<A> <B/></A>", &config);
        stream.next_token().unwrap();
        assert!(stream.has_text_ahead().unwrap());
    }

    #[test]
    fn captured_fragment_keeps_text_verbatim() {
        let xml = "<Wrapper>\n  <Assertion ID=\"a\">\n  <Value> a b </Value>\n</Assertion>\n  <After> x </After></Wrapper>";
        let mut stream = XmlTokenStream::new(xml);
        stream.next_start_tag("Wrapper").unwrap();
        assert!(stream.peek_start_tag().unwrap().is_some());

        let fragment = stream.capture_element(DEFAULT_MAX_DEPTH).unwrap();
        assert_eq!(
            fragment.to_string(),
            "<Assertion ID=\"a\">\n  <Value> a b </Value>\n</Assertion>"
        );

        stream.next_start_tag("After").unwrap();
        assert_eq!(stream.element_text("After").unwrap(), "x");
        assert_eq!(stream.next_token().unwrap(), Some(Token::end(QName::local("Wrapper"))));
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let mut stream = XmlTokenStream::new("<A></B>");
        let err = loop {
            match stream.next_token() {
                Ok(Some(_)) => {}
                Ok(None) => panic!("expected an error"),
                Err(err) => break err,
            }
        };
        assert!(err.is_parse_error());
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokens("").is_empty());
    }
}
