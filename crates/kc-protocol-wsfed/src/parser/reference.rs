//! `wsse:SecurityTokenReference` sub-grammar.

use super::leaf::enter;
use crate::error::{Fault, WsTrustResult};
use crate::stream::{Token, TokenStream};
use crate::types::{wsse, RequestedReference, SecurityTokenReference, WSSE_NS, WSU_NS, XMLNS_NS};

/// Parses a requested reference wrapper such as `RequestedAttachedReference`.
pub(crate) fn parse_requested_reference(
    stream: &mut dyn TokenStream,
    element: &'static str,
    max_depth: usize,
) -> WsTrustResult<RequestedReference> {
    enter(stream, element)?;
    let security_token_reference = parse_security_token_reference(stream, max_depth)?;
    stream.expect_end_tag(element)?;
    Ok(RequestedReference {
        security_token_reference,
    })
}

/// Parses a `SecurityTokenReference`.
///
/// `wsu:Id` and `Usage` are lifted out; namespace declarations are dropped
/// and every other attribute is kept in `other_attributes`. Child elements
/// are captured in order.
pub(crate) fn parse_security_token_reference(
    stream: &mut dyn TokenStream,
    max_depth: usize,
) -> WsTrustResult<SecurityTokenReference> {
    let tag = enter(stream, wsse::SECURITY_TOKEN_REFERENCE)?;
    let mut reference = SecurityTokenReference::default();

    for attribute in tag.attributes {
        let name = &attribute.name;
        if name.namespace == XMLNS_NS {
            continue;
        }
        if name.is(WSU_NS, wsse::ID) {
            reference.id = Some(attribute.value);
        } else if name.local_part == wsse::USAGE
            && (name.namespace.is_empty() || name.namespace == WSSE_NS)
        {
            reference.usage = Some(attribute.value);
        } else {
            reference
                .other_attributes
                .insert(attribute.name, attribute.value);
        }
    }

    loop {
        let closing = match stream.peek_token()? {
            Some(Token::End(name)) => Some(name.local_part.clone()),
            Some(Token::Start(_)) => None,
            Some(Token::Text(_)) => {
                stream.next_token()?;
                continue;
            }
            None => {
                return Err(Fault::StreamExhausted {
                    expected: wsse::SECURITY_TOKEN_REFERENCE,
                }
                .into())
            }
        };
        match closing {
            Some(tag) if tag == wsse::SECURITY_TOKEN_REFERENCE => {
                stream.next_token()?;
                return Ok(reference);
            }
            Some(tag) => return Err(Fault::UnexpectedClose { tag }.into()),
            None => reference.any.push(stream.capture_element(max_depth)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_DEPTH;
    use crate::stream::XmlTokenStream;
    use crate::types::{wst, QName};

    #[test]
    fn lifts_id_and_usage_and_keeps_other_attributes() {
        let xml = format!(
            r#"<RequestedAttachedReference>
                 <wsse:SecurityTokenReference xmlns:wsse="{WSSE_NS}" xmlns:wsu="{WSU_NS}"
                     xmlns:tk="urn:tk" wsu:Id="ref-1" wsse:Usage="usage" tk:TokenType="attached-tktype">
                   <wsse:KeyIdentifier>id-value</wsse:KeyIdentifier>
                 </wsse:SecurityTokenReference>
               </RequestedAttachedReference>"#
        );
        let mut stream = XmlTokenStream::new(&xml);
        let reference =
            parse_requested_reference(&mut stream, wst::REQUESTED_ATTACHED_REFERENCE, DEFAULT_MAX_DEPTH)
                .unwrap()
                .security_token_reference;

        assert_eq!(reference.id.as_deref(), Some("ref-1"));
        assert_eq!(reference.usage.as_deref(), Some("usage"));
        assert_eq!(reference.other_attributes.len(), 1);
        assert_eq!(
            reference.other_attributes.get(&QName::new("urn:tk", "TokenType")),
            Some(&"attached-tktype".to_string())
        );
        assert_eq!(reference.other_attribute("TokenType"), Some("attached-tktype"));
        assert_eq!(reference.any.len(), 1);
        assert_eq!(reference.any[0].text(), "id-value");
    }

    #[test]
    fn wrapper_close_is_required() {
        let mut stream = XmlTokenStream::new(
            "<RequestedUnattachedReference><SecurityTokenReference/><Extra/></RequestedUnattachedReference>",
        );
        let err = parse_requested_reference(
            &mut stream,
            wst::REQUESTED_UNATTACHED_REFERENCE,
            DEFAULT_MAX_DEPTH,
        )
        .unwrap_err();
        assert!(err.is_fault());
    }
}
