//! `Status` sub-grammar.

use super::leaf::{enter, required_text};
use crate::error::{Fault, WsTrustResult};
use crate::stream::{Token, TokenStream};
use crate::types::{wst, Status};

/// Parses a `Status` element.
///
/// Only `Code` and `Reason` children are accepted, each with non-empty text.
/// Character data directly inside `Status` is refused.
pub(crate) fn parse_status(stream: &mut dyn TokenStream) -> WsTrustResult<Status> {
    enter(stream, wst::STATUS)?;
    let mut status = Status::default();

    loop {
        let child = match stream.peek_token()? {
            Some(Token::End(name)) => {
                if name.local_part != wst::STATUS {
                    return Err(Fault::UnexpectedClose {
                        tag: name.local_part.clone(),
                    }
                    .into());
                }
                stream.next_token()?;
                return Ok(status);
            }
            Some(Token::Start(tag)) => tag.name.local_part.clone(),
            Some(Token::Text(_)) => {
                return Err(Fault::UnexpectedText {
                    within: wst::STATUS,
                }
                .into())
            }
            None => {
                return Err(Fault::StreamExhausted {
                    expected: wst::STATUS,
                }
                .into())
            }
        };

        match child.as_str() {
            wst::CODE => {
                enter(stream, wst::CODE)?;
                status.code = required_text(stream, wst::CODE, "validation code")?;
            }
            wst::REASON => {
                enter(stream, wst::REASON)?;
                status.reason = required_text(stream, wst::REASON, "validation reason")?;
            }
            _ => return Err(Fault::UnknownTag { tag: child }.into()),
        }
    }
}
