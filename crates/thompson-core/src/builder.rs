//! Fluent construction of syntax trees without going through the parser.
//!
//! ```
//! use thompson_core::{Builder, MetaChar};
//!
//! let expr = Builder::seq()
//!     .chars("foo")
//!     .char_set(|set| set.char('+').char('-').meta(MetaChar::Digit))
//!     .build();
//! assert_eq!(expr.to_string(), r"foo[+\-\d]");
//! ```
//!
//! Builders also reach nodes the parser never produces, such as named or
//! non-capturing groups and look-arounds.

use crate::ast::{
    Char, CharRange, CharSet, Expr, Group, LookAroundKind, MetaChar, Quantifier, SetItem, Symbol,
};

/// Entry points for every builder.
pub struct Builder;

impl Builder {
    pub fn char(value: char) -> Expr {
        Expr::char(value)
    }

    /// Concatenation of literal chars, or a single char for one-char input.
    pub fn chars(value: &str) -> Expr {
        let mut items: Vec<Expr> = value.chars().map(Expr::char).collect();
        if items.len() == 1 {
            return items.remove(0);
        }
        Expr::Alternative(items)
    }

    pub fn unicode(code_point: u32) -> Expr {
        Expr::Symbol(Symbol::Char(Char::unicode(code_point)))
    }

    pub fn meta(meta: MetaChar) -> Expr {
        Expr::meta(meta)
    }

    pub fn char_set() -> CharSetBuilder {
        CharSetBuilder::default()
    }

    pub fn seq() -> SeqBuilder {
        SeqBuilder::default()
    }

    pub fn or() -> OrBuilder {
        OrBuilder::default()
    }

    pub fn group(expr: Expr) -> GroupBuilder {
        GroupBuilder::new(Some(expr))
    }

    /// `()`
    pub fn empty_group() -> GroupBuilder {
        GroupBuilder::new(None)
    }

    pub fn repeat(expr: Expr) -> RepeatBuilder {
        RepeatBuilder {
            expr,
            greedy: true,
        }
    }

    /// `(?=expr)` or `(?!expr)`.
    pub fn look_ahead(expr: Expr, negative: bool) -> Expr {
        Expr::LookAround {
            kind: LookAroundKind::Ahead,
            negative,
            expr: Box::new(expr),
        }
    }

    /// `(?<=expr)` or `(?<!expr)`.
    pub fn look_behind(expr: Expr, negative: bool) -> Expr {
        Expr::LookAround {
            kind: LookAroundKind::Behind,
            negative,
            expr: Box::new(expr),
        }
    }
}

#[derive(Debug, Default)]
pub struct CharSetBuilder {
    items: Vec<SetItem>,
    negative: bool,
}

impl CharSetBuilder {
    pub fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    pub fn char(mut self, value: char) -> Self {
        self.items.push(SetItem::Char(Char::literal(value)));
        self
    }

    pub fn chars(mut self, value: &str) -> Self {
        self.items
            .extend(value.chars().map(|c| SetItem::Char(Char::literal(c))));
        self
    }

    pub fn unicode(mut self, code_point: u32) -> Self {
        self.items.push(SetItem::Char(Char::unicode(code_point)));
        self
    }

    pub fn range(mut self, start: char, end: char) -> Self {
        self.items.push(SetItem::Range(CharRange::new(
            Char::literal(start),
            Char::literal(end),
        )));
        self
    }

    pub fn unicode_range(mut self, start: u32, end: u32) -> Self {
        self.items.push(SetItem::Range(CharRange::new(
            Char::unicode(start),
            Char::unicode(end),
        )));
        self
    }

    pub fn meta(mut self, meta: MetaChar) -> Self {
        self.items.push(SetItem::Meta(meta));
        self
    }

    pub fn build_set(self) -> CharSet {
        CharSet::new(self.items, self.negative)
    }

    pub fn build(self) -> Expr {
        Expr::Symbol(Symbol::CharSet(self.build_set()))
    }
}

/// Concatenation. Always builds an `Alternative`, even for one item.
#[derive(Debug, Default)]
pub struct SeqBuilder {
    items: Vec<Expr>,
}

impl SeqBuilder {
    pub fn push(mut self, expr: Expr) -> Self {
        self.items.push(expr);
        self
    }

    pub fn char(self, value: char) -> Self {
        self.push(Expr::char(value))
    }

    pub fn chars(mut self, value: &str) -> Self {
        self.items.extend(value.chars().map(Expr::char));
        self
    }

    pub fn unicode(self, code_point: u32) -> Self {
        self.push(Builder::unicode(code_point))
    }

    pub fn meta(self, meta: MetaChar) -> Self {
        self.push(Expr::meta(meta))
    }

    pub fn char_set(self, f: impl FnOnce(CharSetBuilder) -> CharSetBuilder) -> Self {
        self.push(f(CharSetBuilder::default()).build())
    }

    pub fn build(self) -> Expr {
        Expr::Alternative(self.items)
    }
}

/// Ordered alternatives, `a|b|c`.
#[derive(Debug, Default)]
pub struct OrBuilder {
    items: Vec<Expr>,
}

impl OrBuilder {
    pub fn push(mut self, expr: Expr) -> Self {
        self.items.push(expr);
        self
    }

    pub fn char(self, value: char) -> Self {
        self.push(Expr::char(value))
    }

    pub fn chars(self, value: &str) -> Self {
        self.push(Builder::chars(value))
    }

    pub fn meta(self, meta: MetaChar) -> Self {
        self.push(Expr::meta(meta))
    }

    pub fn char_set(self, f: impl FnOnce(CharSetBuilder) -> CharSetBuilder) -> Self {
        self.push(f(CharSetBuilder::default()).build())
    }

    pub fn seq(self, f: impl FnOnce(SeqBuilder) -> SeqBuilder) -> Self {
        self.push(f(SeqBuilder::default()).build())
    }

    pub fn build(self) -> Expr {
        Expr::Disjunction(self.items)
    }
}

#[derive(Debug)]
pub struct GroupBuilder {
    group: Group,
}

impl GroupBuilder {
    fn new(expr: Option<Expr>) -> Self {
        Self {
            group: Group {
                expr: expr.map(Box::new),
                number: None,
                name: None,
                capturing: true,
            },
        }
    }

    pub fn number(mut self, number: u32) -> Self {
        self.group.number = Some(number);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.group.name = Some(name.into());
        self
    }

    pub fn non_capturing(mut self) -> Self {
        self.group.capturing = false;
        self
    }

    pub fn build(self) -> Expr {
        Expr::Group(self.group)
    }
}

/// Wraps an expression in a quantifier. Call `lazy` before picking one.
#[derive(Debug)]
pub struct RepeatBuilder {
    expr: Expr,
    greedy: bool,
}

impl RepeatBuilder {
    pub fn lazy(mut self) -> Self {
        self.greedy = false;
        self
    }

    fn wrap(self, quantifier: Quantifier) -> Expr {
        Expr::repetition(self.expr, quantifier)
    }

    pub fn one_or_more(self) -> Expr {
        let greedy = self.greedy;
        self.wrap(Quantifier::OneOrMore { greedy })
    }

    pub fn one_or_zero(self) -> Expr {
        let greedy = self.greedy;
        self.wrap(Quantifier::OneOrZero { greedy })
    }

    pub fn zero_or_more(self) -> Expr {
        let greedy = self.greedy;
        self.wrap(Quantifier::ZeroOrMore { greedy })
    }

    pub fn range(self, from: u32, to: u32) -> Expr {
        let greedy = self.greedy;
        self.wrap(Quantifier::Range { from, to, greedy })
    }

    /// `{n}`; laziness does not apply.
    pub fn times(self, n: u32) -> Expr {
        self.wrap(Quantifier::ManyTimes(n))
    }

    pub fn at_least(self, n: u32) -> Expr {
        let greedy = self.greedy;
        self.wrap(Quantifier::ManyTimesOrMore { n, greedy })
    }
}
