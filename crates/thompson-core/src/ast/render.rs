//! Canonical pattern rendering.
//!
//! Parsing the output of `Display` yields the same tree for anything the
//! parser itself produced. Inside a set only `]`, `\` and an inner `-` need
//! escaping (plus `^` in the first position); outside, every entity char does.

use std::fmt::{self, Display, Formatter, Write};

use super::{Char, CharSet, Expr, Group, LookAroundKind, MetaChar, Quantifier, SetItem, Symbol};

/// Characters escaped with `\` outside a char set.
const ENTITY_CHARS: &[char] = &[
    '*', '+', '?', '.', '{', '}', '(', ')', '[', ']', '^', '$', '\\', '|',
];

fn write_unicode(f: &mut Formatter<'_>, code_point: u32, width: u8) -> fmt::Result {
    write!(f, "\\u{{{:0width$x}}}", code_point, width = width as usize)
}

/// Position of a char inside `[...]`, for escaping decisions.
#[derive(Clone, Copy)]
struct SetPos {
    first: bool,
    edge: bool,
}

fn write_set_char(f: &mut Formatter<'_>, ch: Char, pos: SetPos) -> fmt::Result {
    match ch {
        Char::Unicode { code_point, width } => write_unicode(f, code_point, width),
        Char::Literal { value } => {
            let escape = match value {
                ']' | '\\' => true,
                '-' => !pos.edge,
                '^' => pos.first,
                _ => false,
            };
            if escape {
                f.write_char('\\')?;
            }
            f.write_char(value)
        }
    }
}

impl Display for MetaChar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.escape() {
            Some(c) => write!(f, "\\{c}"),
            None => f.write_char('.'),
        }
    }
}

impl Display for Char {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Char::Unicode { code_point, width } => write_unicode(f, code_point, width),
            Char::Literal { value } => {
                if ENTITY_CHARS.contains(&value) {
                    f.write_char('\\')?;
                }
                f.write_char(value)
            }
        }
    }
}

impl Display for CharSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        if self.negative {
            f.write_char('^')?;
        }
        let last = self.items.len().saturating_sub(1);
        for (i, item) in self.items.iter().enumerate() {
            let first = i == 0;
            match *item {
                SetItem::Char(ch) => {
                    let edge = first || i == last;
                    write_set_char(f, ch, SetPos { first, edge })?;
                }
                SetItem::Range(range) => {
                    write_set_char(f, range.start, SetPos { first, edge: false })?;
                    f.write_char('-')?;
                    write_set_char(f, range.end, SetPos { first: false, edge: false })?;
                }
                SetItem::Meta(meta) => write!(f, "{meta}")?,
            }
        }
        f.write_char(']')
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(ch) => ch.fmt(f),
            Symbol::Meta(meta) => meta.fmt(f),
            Symbol::CharSet(set) => set.fmt(f),
        }
    }
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Quantifier::OneOrMore { .. } => f.write_char('+')?,
            Quantifier::OneOrZero { .. } => f.write_char('?')?,
            Quantifier::ZeroOrMore { .. } => f.write_char('*')?,
            Quantifier::Range { from, to, .. } => write!(f, "{{{from},{to}}}")?,
            Quantifier::ManyTimes(n) => write!(f, "{{{n}}}")?,
            Quantifier::ManyTimesOrMore { n, .. } => write!(f, "{{{n},}}")?,
        }
        if !self.is_greedy() {
            f.write_char('?')?;
        }
        Ok(())
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        if let Some(name) = &self.name {
            write!(f, "?<{name}>")?;
        } else if !self.capturing {
            f.write_str("?:")?;
        }
        if let Some(expr) = &self.expr {
            expr.fmt(f)?;
        }
        f.write_char(')')
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(symbol) => symbol.fmt(f),
            Expr::Alternative(items) => items.iter().try_for_each(|item| item.fmt(f)),
            Expr::Disjunction(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char('|')?;
                    }
                    item.fmt(f)?;
                }
                Ok(())
            }
            Expr::Group(group) => group.fmt(f),
            Expr::Repetition { expr, quantifier } => write!(f, "{expr}{quantifier}"),
            Expr::LookAround {
                kind,
                negative,
                expr,
            } => {
                let opener = match (*kind, *negative) {
                    (LookAroundKind::Ahead, false) => "(?=",
                    (LookAroundKind::Ahead, true) => "(?!",
                    (LookAroundKind::Behind, false) => "(?<=",
                    (LookAroundKind::Behind, true) => "(?<!",
                };
                write!(f, "{opener}{expr})")
            }
        }
    }
}
