//! Builds the syntax tree from lexer tokens.
//!
//! The refactor pass nests tokens by parentheses first; the parser then works
//! on one group's token list at a time:
//!
//! 1. split at top-level `|` into alternatives;
//! 2. parse each alternative as a concatenation of atoms, each optionally
//!    followed by one quantifier;
//! 3. recurse into groups and char sets.

mod error;
mod refactor;

#[cfg(test)]
mod parser_tests;

pub use error::{GroupFeature, ParseError};
pub use refactor::refactor;

use thompson_core::{Char, CharRange, CharSet, Expr, Group, Quantifier, SetItem, Symbol};

use crate::lexer::{Quantity, QuantityKind, Token, TokenKind};

/// Parses a flat token list. `None` is the empty pattern.
pub fn parse(tokens: &[Token]) -> Result<Option<Expr>, ParseError> {
    let nested = refactor(tokens)?;
    Parser::default().sequence(&nested)
}

#[derive(Default)]
struct Parser {
    /// Number of capturing groups opened so far.
    groups: u32,
}

impl Parser {
    /// One group body: a disjunction, or a single concatenation.
    fn sequence(&mut self, tokens: &[Token]) -> Result<Option<Expr>, ParseError> {
        let pipes: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_entity('|'))
            .map(|(i, _)| i)
            .collect();
        if pipes.is_empty() {
            return self.concatenation(tokens);
        }

        for (n, &at) in pipes.iter().enumerate() {
            let after_pipe = n > 0 && pipes[n - 1] + 1 == at;
            if at == 0 || at == tokens.len() - 1 || after_pipe {
                return Err(ParseError::InvalidDisjunction {
                    span: tokens[at].span,
                });
            }
        }

        let mut branches = Vec::with_capacity(pipes.len() + 1);
        for segment in tokens.split(|t| t.is_entity('|')) {
            // Segments are non-empty after the checks above.
            if let Some(expr) = self.concatenation(segment)? {
                branches.push(expr);
            }
        }
        Ok(Some(Expr::Disjunction(branches)))
    }

    fn concatenation(&mut self, tokens: &[Token]) -> Result<Option<Expr>, ParseError> {
        let mut items = Vec::new();
        let mut iter = tokens.iter().peekable();
        while let Some(token) = iter.next() {
            let mut atom = self.atom(token)?;
            if let Some(Token {
                kind: TokenKind::Quantity(quantity),
                ..
            }) = iter.peek()
            {
                atom = Expr::repetition(atom, quantifier(*quantity));
                iter.next();
            }
            items.push(atom);
        }
        Ok(match items.len() {
            0 => None,
            1 => items.pop(),
            _ => Some(Expr::Alternative(items)),
        })
    }

    fn atom(&mut self, token: &Token) -> Result<Expr, ParseError> {
        Ok(match &token.kind {
            TokenKind::Char(_) | TokenKind::Unicode { .. } | TokenKind::Meta(_) => {
                Expr::Symbol(symbol(token)?)
            }
            TokenKind::CharSet(inner) => Expr::Symbol(Symbol::CharSet(char_set(inner)?)),
            TokenKind::Group(inner) => self.group(inner, token)?,
            TokenKind::Quantity(_) | TokenKind::Entity(_) => return Err(unexpected(token)),
        })
    }

    fn group(&mut self, inner: &[Token], token: &Token) -> Result<Expr, ParseError> {
        match inner.first() {
            Some(first) if first.is_entity('?') => {
                return Err(ParseError::UnsupportedGroupFeature {
                    feature: group_feature(&inner[1..]),
                    span: token.span,
                });
            }
            Some(first) if first.is_entity('*') || first.is_entity('+') => {
                return Err(unexpected(first));
            }
            _ => {}
        }
        self.groups += 1;
        let number = self.groups;
        let expr = self.sequence(inner)?;
        Ok(Expr::Group(Group::capturing(expr, number)))
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.to_string(),
        span: token.span,
    }
}

/// What follows `(?`.
fn group_feature(rest: &[Token]) -> GroupFeature {
    let chars: Vec<char> = rest
        .iter()
        .take(2)
        .map_while(|t| match t.kind {
            TokenKind::Char(c) => Some(c),
            _ => None,
        })
        .collect();
    match chars.as_slice() {
        [':', ..] => GroupFeature::NonCapturing,
        ['=' | '!', ..] => GroupFeature::LookAhead,
        ['<', '=' | '!'] => GroupFeature::LookBehind,
        ['<', ..] => GroupFeature::Named,
        _ => GroupFeature::Unknown,
    }
}

fn quantifier(quantity: Quantity) -> Quantifier {
    let greedy = quantity.greedy;
    match quantity.kind {
        QuantityKind::Question => Quantifier::OneOrZero { greedy },
        QuantityKind::Plus => Quantifier::OneOrMore { greedy },
        QuantityKind::Star => Quantifier::ZeroOrMore { greedy },
        QuantityKind::Range { from, to } => Quantifier::Range { from, to, greedy },
        // `{m}?` is the same as `{m}`.
        QuantityKind::Exactly(n) => Quantifier::ManyTimes(n),
        QuantityKind::AtLeast(n) => Quantifier::ManyTimesOrMore { n, greedy },
    }
}

fn char_of(token: &Token) -> Option<Char> {
    match token.kind {
        TokenKind::Char(value) => Some(Char::Literal { value }),
        TokenKind::Unicode { code_point, width } => Some(Char::Unicode { code_point, width }),
        _ => None,
    }
}

fn symbol(token: &Token) -> Result<Symbol, ParseError> {
    if let Some(ch) = char_of(token) {
        return Ok(Symbol::Char(ch));
    }
    match token.kind {
        TokenKind::Meta(meta) => Ok(Symbol::Meta(meta)),
        _ => Err(unexpected(token)),
    }
}

/// Interior of `[...]`: an optional leading `^`, then chars, ranges and
/// meta-chars.
fn char_set(tokens: &[Token]) -> Result<CharSet, ParseError> {
    let (negative, members) = match tokens.split_first() {
        Some((first, rest)) if first.is_entity('^') => (true, rest),
        _ => (false, tokens),
    };

    let mut items = Vec::with_capacity(members.len());
    let mut iter = members.iter();
    while let Some(token) = iter.next() {
        if !token.is_entity('-') {
            items.push(match token.kind {
                TokenKind::Meta(meta) => SetItem::Meta(meta),
                _ => SetItem::Char(char_of(token).ok_or_else(|| unexpected(token))?),
            });
            continue;
        }

        let Some(SetItem::Char(start)) = items.pop() else {
            return Err(unexpected(token));
        };
        let end = iter.next().and_then(char_of).ok_or_else(|| unexpected(token))?;
        items.push(SetItem::Range(CharRange::new(start, end)));
    }
    Ok(CharSet::new(items, negative))
}
