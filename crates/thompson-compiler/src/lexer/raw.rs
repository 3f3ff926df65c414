//! First pass: split the pattern into context-free pieces.
//!
//! Nothing here knows whether it sits inside `[...]` or `{...}`; the
//! context pass in the parent module decides what each piece means.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RawKind {
    #[regex(r"\\u\{[^}]*\}")]
    UnicodeEscape,

    #[regex(r"\\[^u]")]
    #[token(r"\u")]
    Escape,

    /// Trailing `\` with nothing to escape.
    #[token("\\")]
    Backslash,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("|")]
    Pipe,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    #[token("*?")]
    StarLazy,

    #[token("+?")]
    PlusLazy,

    #[token("??")]
    QuestionLazy,

    #[token(".")]
    Dot,

    #[token("^")]
    Caret,

    #[token("-")]
    Dash,

    #[regex(r"[^\\\[\]{}()|*+?.^\-]")]
    Char,
}

impl RawKind {
    pub(super) fn is_operator(self) -> bool {
        matches!(
            self,
            Self::Star
                | Self::Plus
                | Self::Question
                | Self::StarLazy
                | Self::PlusLazy
                | Self::QuestionLazy
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct RawToken {
    pub kind: RawKind,
    pub start: usize,
    pub end: usize,
}

/// Scans `source` into raw pieces. Never fails: every character belongs to
/// some piece.
pub(super) fn scan(source: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut lexer = RawKind::lexer(source);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        // Unreachable with the catch-all `Char` pattern; kept as a literal.
        let kind = result.unwrap_or(RawKind::Char);
        tokens.push(RawToken {
            kind,
            start: span.start,
            end: span.end,
        });
    }
    tokens
}
