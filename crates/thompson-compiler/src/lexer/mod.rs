//! Lexer for the pattern syntax.
//!
//! Two passes: `raw` splits the text with logos, then the context pass here
//! resolves what each piece means where it stands:
//!
//! - inside `[...]` most punctuation is literal, `^` first negates and `-`
//!   forms a range unless it sits at either edge;
//! - `{...}` is read as a bounded quantifier;
//! - `*`, `+`, `?` right after `(` are group-feature markers, not quantifiers.

mod error;
mod raw;
mod token;

#[cfg(test)]
mod lexer_tests;

pub use error::LexError;
pub use token::{Quantity, QuantityKind, Token, TokenKind};

use thompson_core::{MetaChar, Span};

use raw::{RawKind, RawToken};

/// Characters that are literal when escaped anywhere.
const ESCAPABLE: &[char] = &[
    '*', '+', '?', '.', '{', '}', '(', ')', '[', ']', '^', '$', '\\', '|',
];

/// Tokenizes a pattern. Char sets hold their own token list; groups are
/// left flat for the parser's refactor pass.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).run()
}

struct Lexer<'src> {
    source: &'src str,
    raw: Vec<RawToken>,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            raw: raw::scan(source),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(raw) = self.bump() {
            let token = match raw.kind {
                RawKind::BracketOpen => self.char_set(raw)?,
                RawKind::BraceOpen => {
                    let (quantity, extra) = self.quantity(raw)?;
                    self.tokens.push(quantity);
                    if let Some(extra) = extra {
                        self.tokens.push(extra);
                    }
                    continue;
                }
                kind if kind.is_operator() => self.operator(raw),
                RawKind::ParenOpen | RawKind::ParenClose | RawKind::Pipe => {
                    Token::new(TokenKind::Entity(self.first_char(raw)), span(raw))
                }
                RawKind::Dot => Token::new(TokenKind::Meta(MetaChar::Dot), span(raw)),
                RawKind::Escape => self.escape(raw, false)?,
                RawKind::UnicodeEscape => self.unicode(raw)?,
                RawKind::Backslash => return Err(lone_backslash(raw)),
                _ => self.literal(raw),
            };
            self.tokens.push(token);
        }
        Ok(self.tokens)
    }

    fn bump(&mut self) -> Option<RawToken> {
        let raw = self.raw.get(self.pos).copied()?;
        self.pos += 1;
        Some(raw)
    }

    fn peek(&self) -> Option<RawKind> {
        self.raw.get(self.pos).map(|raw| raw.kind)
    }

    fn text(&self, raw: RawToken) -> &'src str {
        &self.source[raw.start..raw.end]
    }

    fn first_char(&self, raw: RawToken) -> char {
        self.text(raw).chars().next().unwrap_or_default()
    }

    fn literal(&self, raw: RawToken) -> Token {
        Token::new(TokenKind::Char(self.first_char(raw)), span(raw))
    }

    /// `*`, `+`, `?` and their lazy forms.
    fn operator(&self, raw: RawToken) -> Token {
        let (kind, greedy) = match raw.kind {
            RawKind::Star => (QuantityKind::Star, true),
            RawKind::Plus => (QuantityKind::Plus, true),
            RawKind::Question => (QuantityKind::Question, true),
            RawKind::StarLazy => (QuantityKind::Star, false),
            RawKind::PlusLazy => (QuantityKind::Plus, false),
            _ => (QuantityKind::Question, false),
        };
        let after_paren = self.tokens.last().is_some_and(|t| t.is_entity('('));
        if greedy && after_paren {
            return Token::new(TokenKind::Entity(self.first_char(raw)), span(raw));
        }
        Token::new(TokenKind::Quantity(Quantity { kind, greedy }), span(raw))
    }

    /// `\x` outside or inside a char set.
    fn escape(&self, raw: RawToken, in_set: bool) -> Result<Token, LexError> {
        let target = self.text(raw).chars().nth(1).unwrap_or_default();
        let kind = if ESCAPABLE.contains(&target) || (in_set && target == '-') {
            TokenKind::Char(target)
        } else if let Some(meta) = MetaChar::from_escape(target) {
            TokenKind::Meta(meta)
        } else if target == 'u' {
            return Err(LexError::InvalidUnicodeEscape { span: span(raw) });
        } else {
            return Err(LexError::UnsupportedEscape {
                target: Some(target),
                span: span(raw),
            });
        };
        Ok(Token::new(kind, span(raw)))
    }

    /// `\u{hhhh}` or `\u{hhhhhh}`.
    fn unicode(&self, raw: RawToken) -> Result<Token, LexError> {
        let text = self.text(raw);
        let digits = &text[3..text.len() - 1];
        let span = span(raw);
        let width = digits.chars().count();
        if width != 4 && width != 6 {
            return Err(LexError::InvalidUnicodeEscape { span });
        }
        let trimmed = digits.trim_end_matches(' ');
        if trimmed.is_empty() {
            return Err(LexError::BlankHexDigits { span });
        }
        if !trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LexError::InvalidHexDigits { span });
        }
        let code_point = u32::from_str_radix(trimmed, 16)
            .ok()
            .filter(|&cp| cp <= 0x10ffff)
            .ok_or(LexError::CodePointOutOfRange { span })?;
        Ok(Token::new(
            TokenKind::Unicode {
                code_point,
                width: width as u8,
            },
            span,
        ))
    }

    /// `[...]`. The first unescaped `]` closes the set.
    fn char_set(&mut self, open: RawToken) -> Result<Token, LexError> {
        let mut members = Vec::new();
        let close = loop {
            match self.bump() {
                Some(raw) if raw.kind == RawKind::BracketClose => break raw,
                Some(raw) => members.push(raw),
                None => {
                    return Err(LexError::UnterminatedCharSet {
                        span: Span::new(open.start, self.source.len()),
                    });
                }
            }
        };

        let mut tokens = Vec::with_capacity(members.len());
        let mut rest = members.as_slice();
        if let Some((first, tail)) = rest.split_first()
            && first.kind == RawKind::Caret
        {
            tokens.push(Token::new(TokenKind::Entity('^'), span(*first)));
            rest = tail;
        }

        let last = rest.len().saturating_sub(1);
        for (i, &raw) in rest.iter().enumerate() {
            let token = match raw.kind {
                RawKind::Escape => self.escape(raw, true)?,
                RawKind::UnicodeEscape => self.unicode(raw)?,
                RawKind::Backslash => return Err(lone_backslash(raw)),
                RawKind::Dash if i != 0 && i != last => {
                    Token::new(TokenKind::Entity('-'), span(raw))
                }
                RawKind::Dot => Token::new(TokenKind::Char('.'), span(raw)),
                // Lazy operators span two literal chars.
                RawKind::StarLazy | RawKind::PlusLazy | RawKind::QuestionLazy => {
                    let first = TokenKind::Char(self.first_char(raw));
                    tokens.push(Token::new(first, Span::new(raw.start, raw.start + 1)));
                    Token::new(TokenKind::Char('?'), Span::new(raw.start + 1, raw.end))
                }
                _ => self.literal(raw),
            };
            tokens.push(token);
        }

        Ok(Token::new(
            TokenKind::CharSet(tokens),
            Span::new(open.start, close.end),
        ))
    }

    /// `{m}`, `{m,n}`, `{m,}` with an optional trailing `?`.
    ///
    /// Returns the quantity plus a trailing greedy `?` when the closing brace
    /// is followed by `??`.
    fn quantity(&mut self, open: RawToken) -> Result<(Token, Option<Token>), LexError> {
        let close = loop {
            match self.bump() {
                Some(raw) if raw.kind == RawKind::BraceClose => break raw,
                Some(_) => {}
                None => {
                    return Err(LexError::UnterminatedQuantity {
                        span: Span::new(open.start, self.source.len()),
                    });
                }
            }
        };
        let whole = Span::new(open.start, close.end);
        let body_start = open.end;
        let body = &self.source[body_start..close.start];
        if body.is_empty() {
            return Err(LexError::EmptyQuantity { span: whole });
        }

        let kind = match body.split_once(',') {
            None => QuantityKind::Exactly(parse_bound(body, body_start)?),
            Some((lower, upper)) => {
                if lower.is_empty() {
                    return Err(LexError::MissingLowerBound { span: whole });
                }
                let from = parse_bound(lower, body_start)?;
                if upper.is_empty() {
                    QuantityKind::AtLeast(from)
                } else {
                    let to = parse_bound(upper, body_start + lower.len() + 1)?;
                    QuantityKind::Range { from, to }
                }
            }
        };

        let mut end = close.end;
        let mut greedy = true;
        let mut extra = None;
        match self.peek() {
            Some(RawKind::Question) => {
                end = self.bump().map_or(end, |raw| raw.end);
                greedy = false;
            }
            Some(RawKind::QuestionLazy) => {
                if let Some(raw) = self.bump() {
                    end = raw.start + 1;
                    greedy = false;
                    let question = Quantity {
                        kind: QuantityKind::Question,
                        greedy: true,
                    };
                    extra = Some(Token::new(
                        TokenKind::Quantity(question),
                        Span::new(raw.start + 1, raw.end),
                    ));
                }
            }
            _ => {}
        }

        let token = Token::new(
            TokenKind::Quantity(Quantity { kind, greedy }),
            Span::new(open.start, end),
        );
        Ok((token, extra))
    }
}

fn span(raw: RawToken) -> Span {
    Span::new(raw.start, raw.end)
}

fn lone_backslash(raw: RawToken) -> LexError {
    LexError::UnsupportedEscape {
        target: None,
        span: span(raw),
    }
}

/// Decimal quantifier bound. Trailing spaces are dropped; anything else that
/// is not a digit is invalid.
fn parse_bound(text: &str, offset: usize) -> Result<u32, LexError> {
    let span = Span::new(offset, offset + text.len());
    let digits = text.trim_end_matches(' ');
    if digits.is_empty() {
        return Err(LexError::BlankDecimalDigits { span });
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(LexError::InvalidDecimalDigits { span });
    }
    digits
        .parse()
        .map_err(|_| LexError::InvalidDecimalDigits { span })
}
