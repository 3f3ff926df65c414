//! Pattern syntax tree.
//!
//! Trees are produced by the parser, normalized by the transformer and
//! consumed by the compiler. They are never mutated after construction;
//! every stage builds a new tree.
//!
//! `Display` renders the canonical pattern syntax (see `render`).

mod render;


use serde::Serialize;

use crate::meta;

/// Backslash escapes and `.` with a special meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MetaChar {
    /// `.`
    Dot,
    /// `\f`
    FormFeed,
    /// `\r`
    CarriageReturn,
    /// `\n`
    LineFeed,
    /// `\t`
    Tab,
    /// `\v`
    VerticalTab,
    /// `\0`
    Null,
    /// `\b`
    Backspace,
    /// `\s`
    Space,
    /// `\S`
    NotSpace,
    /// `\w`
    Word,
    /// `\W`
    NotWord,
    /// `\d`
    Digit,
    /// `\D`
    NotDigit,
}

impl MetaChar {
    /// Meta-char written as `\<c>`, if `c` names one.
    pub fn from_escape(c: char) -> Option<Self> {
        Some(match c {
            'f' => Self::FormFeed,
            'r' => Self::CarriageReturn,
            'n' => Self::LineFeed,
            't' => Self::Tab,
            'v' => Self::VerticalTab,
            '0' => Self::Null,
            'b' => Self::Backspace,
            's' => Self::Space,
            'S' => Self::NotSpace,
            'w' => Self::Word,
            'W' => Self::NotWord,
            'd' => Self::Digit,
            'D' => Self::NotDigit,
            _ => return None,
        })
    }

    /// Letter after the backslash. `None` for `.`.
    pub fn escape(self) -> Option<char> {
        Some(match self {
            Self::Dot => return None,
            Self::FormFeed => 'f',
            Self::CarriageReturn => 'r',
            Self::LineFeed => 'n',
            Self::Tab => 't',
            Self::VerticalTab => 'v',
            Self::Null => '0',
            Self::Backspace => 'b',
            Self::Space => 's',
            Self::NotSpace => 'S',
            Self::Word => 'w',
            Self::NotWord => 'W',
            Self::Digit => 'd',
            Self::NotDigit => 'D',
        })
    }

    /// Code point of a control escape (`\f`, `\n`, `\0`, ...).
    pub fn code_point(self) -> Option<u32> {
        Some(match self {
            Self::FormFeed => 0x0c,
            Self::CarriageReturn => 0x0d,
            Self::LineFeed => 0x0a,
            Self::Tab => 0x09,
            Self::VerticalTab => 0x0b,
            Self::Null => 0x00,
            Self::Backspace => 0x08,
            _ => return None,
        })
    }

    /// True for the upper-case class escapes `\S \W \D`.
    pub fn is_negated(self) -> bool {
        matches!(self, Self::NotSpace | Self::NotWord | Self::NotDigit)
    }

    pub fn includes(self, c: char) -> bool {
        if let Some(cp) = self.code_point() {
            return c as u32 == cp;
        }
        match self {
            Self::Dot => !matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'),
            _ => meta::table().class_includes(self, c),
        }
    }
}

/// A single literal character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Char {
    Literal {
        value: char,
    },
    /// `\u{hhhh}` or `\u{hhhhhh}`.
    ///
    /// `width` is the number of hex digits the escape was written with so
    /// that rendering reproduces the source. Zero renders minimal hex.
    Unicode {
        code_point: u32,
        width: u8,
    },
}

impl Char {
    pub fn literal(value: char) -> Self {
        Self::Literal { value }
    }

    /// Unicode char rendered with minimal hex digits.
    pub fn unicode(code_point: u32) -> Self {
        Self::Unicode {
            code_point,
            width: 0,
        }
    }

    pub fn code_point(self) -> u32 {
        match self {
            Self::Literal { value } => value as u32,
            Self::Unicode { code_point, .. } => code_point,
        }
    }

    pub fn includes(self, c: char) -> bool {
        self.code_point() == c as u32
    }
}

/// Inclusive code point range inside a char set, `a-z`.
///
/// Endpoints are not reordered; `z-a` contains nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CharRange {
    pub start: Char,
    pub end: Char,
}

impl CharRange {
    pub fn new(start: Char, end: Char) -> Self {
        Self { start, end }
    }

    pub fn includes(self, c: char) -> bool {
        (self.start.code_point()..=self.end.code_point()).contains(&(c as u32))
    }
}

/// Member of a char set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SetItem {
    Char(Char),
    Range(CharRange),
    Meta(MetaChar),
}

impl SetItem {
    pub fn includes(self, c: char) -> bool {
        match self {
            Self::Char(ch) => ch.includes(c),
            Self::Range(range) => range.includes(c),
            Self::Meta(meta) => meta.includes(c),
        }
    }
}

/// `[...]` or `[^...]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CharSet {
    pub items: Vec<SetItem>,
    pub negative: bool,
}

impl CharSet {
    pub fn new(items: Vec<SetItem>, negative: bool) -> Self {
        Self { items, negative }
    }

    /// True iff some member matches, inverted for a negative set.
    pub fn includes(&self, c: char) -> bool {
        self.items.iter().any(|item| item.includes(c)) != self.negative
    }
}

/// Anything that consumes exactly one character.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Symbol {
    Char(Char),
    Meta(MetaChar),
    CharSet(CharSet),
}

impl Symbol {
    pub fn includes(&self, c: char) -> bool {
        match self {
            Self::Char(ch) => ch.includes(c),
            Self::Meta(meta) => meta.includes(c),
            Self::CharSet(set) => set.includes(c),
        }
    }
}

/// Repetition operator. Every form except `{n}` has a lazy variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Quantifier {
    /// `+`
    OneOrMore { greedy: bool },
    /// `?`
    OneOrZero { greedy: bool },
    /// `*`
    ZeroOrMore { greedy: bool },
    /// `{from,to}`
    Range { from: u32, to: u32, greedy: bool },
    /// `{n}`
    ManyTimes(u32),
    /// `{n,}`
    ManyTimesOrMore { n: u32, greedy: bool },
}

impl Quantifier {
    pub fn is_greedy(self) -> bool {
        match self {
            Self::OneOrMore { greedy }
            | Self::OneOrZero { greedy }
            | Self::ZeroOrMore { greedy }
            | Self::Range { greedy, .. }
            | Self::ManyTimesOrMore { greedy, .. } => greedy,
            Self::ManyTimes(_) => true,
        }
    }
}

/// Parenthesized sub-expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Group {
    /// `None` for `()`.
    pub expr: Option<Box<Expr>>,
    /// Capture index, 1-based in order of the opening parenthesis.
    pub number: Option<u32>,
    pub name: Option<String>,
    pub capturing: bool,
}

impl Group {
    pub fn capturing(expr: Option<Expr>, number: u32) -> Self {
        Self {
            expr: expr.map(Box::new),
            number: Some(number),
            name: None,
            capturing: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum LookAroundKind {
    Ahead,
    Behind,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Expr {
    Symbol(Symbol),
    /// Concatenation, matched left to right.
    Alternative(Vec<Expr>),
    /// `a|b|c`, tried in order.
    Disjunction(Vec<Expr>),
    Group(Group),
    Repetition {
        expr: Box<Expr>,
        quantifier: Quantifier,
    },
    /// Only buildable by hand; the parser rejects `(?=` and friends.
    LookAround {
        kind: LookAroundKind,
        negative: bool,
        expr: Box<Expr>,
    },
}

impl Expr {
    pub fn char(value: char) -> Self {
        Self::Symbol(Symbol::Char(Char::literal(value)))
    }

    pub fn meta(meta: MetaChar) -> Self {
        Self::Symbol(Symbol::Meta(meta))
    }

    pub fn repetition(expr: Expr, quantifier: Quantifier) -> Self {
        Self::Repetition {
            expr: Box::new(expr),
            quantifier,
        }
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}
