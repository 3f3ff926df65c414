use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use thompson_core::{MetaChar, Span};

/// Token with the byte span of the pattern text it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: impl Into<Span>) -> Self {
        Self {
            kind,
            span: span.into(),
        }
    }

    pub fn is_entity(&self, c: char) -> bool {
        self.kind == TokenKind::Entity(c)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Char(char),
    /// `\u{hhhh}` or `\u{hhhhhh}`, with the digit count it was written with.
    Unicode { code_point: u32, width: u8 },
    Meta(MetaChar),
    /// Structural character: `(`, `)`, `|`, `^` and `-` inside a set, or a
    /// `?`, `*`, `+` right after `(`.
    Entity(char),
    /// `[...]`. Holds the interior tokens, including a leading `^` entity.
    CharSet(Vec<Token>),
    Quantity(Quantity),
    /// `(...)` without the parentheses. Only built by the refactor pass.
    Group(Vec<Token>),
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Char(_) => "Char",
            Self::Unicode { .. } => "Unicode",
            Self::Meta(_) => "Meta",
            Self::Entity(_) => "Entity",
            Self::CharSet(_) => "CharSet",
            Self::Quantity(q) if q.greedy => "Quantity",
            Self::Quantity(_) => "LazyQuantity",
            Self::Group(_) => "Group",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) | Self::Entity(c) => write!(f, "`{c}`"),
            Self::Unicode { code_point, .. } => write!(f, "`\\u{{{code_point:x}}}`"),
            Self::Meta(meta) => write!(f, "`{meta}`"),
            Self::CharSet(_) => f.write_str("character set"),
            Self::Quantity(quantity) => write!(f, "quantifier `{quantity}`"),
            Self::Group(_) => f.write_str("group"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Quantity {
    pub kind: QuantityKind,
    pub greedy: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum QuantityKind {
    /// `?`
    Question,
    /// `+`
    Plus,
    /// `*`
    Star,
    /// `{m}`
    Exactly(u32),
    /// `{m,n}`
    Range { from: u32, to: u32 },
    /// `{m,}`
    AtLeast(u32),
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            QuantityKind::Question => f.write_str("?")?,
            QuantityKind::Plus => f.write_str("+")?,
            QuantityKind::Star => f.write_str("*")?,
            QuantityKind::Exactly(m) => write!(f, "{{{m}}}")?,
            QuantityKind::Range { from, to } => write!(f, "{{{from},{to}}}")?,
            QuantityKind::AtLeast(m) => write!(f, "{{{m},}}")?,
        }
        if !self.greedy {
            f.write_str("?")?;
        }
        Ok(())
    }
}
