//! Nests the flat token list by parentheses.
//!
//! Every `(` ... `)` run becomes one `Group` token holding its interior. The
//! top level behaves as if wrapped in a virtual pair, so a stray `)` there is
//! as unbalanced as a missing one.

use thompson_core::Span;

use super::ParseError;
use crate::lexer::{Token, TokenKind};

pub fn refactor(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let (nested, consumed) = nest(tokens, 0, None)?;
    debug_assert_eq!(consumed, tokens.len());
    Ok(nested)
}

/// Collects tokens from `start` until the `)` matching `open`, or the end of
/// input at the top level. Returns the nested tokens and how many input
/// tokens were consumed, the closing `)` included.
fn nest(
    tokens: &[Token],
    start: usize,
    open: Option<Span>,
) -> Result<(Vec<Token>, usize), ParseError> {
    let mut out = Vec::new();
    let mut pos = start;
    while let Some(token) = tokens.get(pos) {
        pos += 1;
        match token.kind {
            TokenKind::Entity('(') => {
                let (inner, consumed) = nest(tokens, pos, Some(token.span))?;
                pos += consumed;
                let close = tokens[pos - 1].span;
                out.push(Token::new(TokenKind::Group(inner), token.span.cover(close)));
            }
            TokenKind::Entity(')') => {
                return match open {
                    Some(_) => Ok((out, pos - start)),
                    None => Err(ParseError::UnbalancedGroup { span: token.span }),
                };
            }
            _ => out.push(token.clone()),
        }
    }
    match open {
        Some(span) => Err(ParseError::UnbalancedGroup { span }),
        None => Ok((out, pos - start)),
    }
}
