//! Definition table for the class escapes.
//!
//! `\s`, `\w` and `\d` are defined as char sets; the upper-case forms are the
//! same sets negated. The table is built once per process and shared.

use std::sync::LazyLock;

use crate::ast::{Char, CharRange, CharSet, MetaChar, SetItem, Symbol};

static TABLE: LazyLock<MetaTable> = LazyLock::new(MetaTable::build);

pub fn table() -> &'static MetaTable {
    &TABLE
}

#[derive(Debug)]
pub struct MetaTable {
    space: Vec<SetItem>,
    word: Vec<SetItem>,
    digit: Vec<SetItem>,
}

fn unicode(code_point: u32) -> SetItem {
    SetItem::Char(Char::unicode(code_point))
}

fn range(start: Char, end: Char) -> SetItem {
    SetItem::Range(CharRange::new(start, end))
}

fn ascii_range(start: char, end: char) -> SetItem {
    range(Char::literal(start), Char::literal(end))
}

impl MetaTable {
    fn build() -> Self {
        let space = vec![
            SetItem::Char(Char::literal(' ')),
            unicode(0x0c),
            unicode(0x0a),
            unicode(0x0d),
            unicode(0x09),
            unicode(0x0b),
            unicode(0xa0),
            unicode(0x1680),
            range(Char::unicode(0x2000), Char::unicode(0x200a)),
            unicode(0x2028),
            unicode(0x2029),
            unicode(0x202f),
            unicode(0x205f),
            unicode(0x3000),
            unicode(0xfeff),
        ];
        let word = vec![
            ascii_range('A', 'Z'),
            ascii_range('a', 'z'),
            ascii_range('0', '9'),
            SetItem::Char(Char::literal('_')),
        ];
        let digit = vec![ascii_range('0', '9')];
        Self { space, word, digit }
    }

    /// Members of a class escape's set, ignoring negation.
    pub fn class_items(&self, meta: MetaChar) -> Option<&[SetItem]> {
        match meta {
            MetaChar::Space | MetaChar::NotSpace => Some(&self.space),
            MetaChar::Word | MetaChar::NotWord => Some(&self.word),
            MetaChar::Digit | MetaChar::NotDigit => Some(&self.digit),
            _ => None,
        }
    }

    /// Replacement for a meta-char outside a set.
    ///
    /// Control escapes become unicode chars, class escapes become sets.
    /// `None` for meta-chars without an expansion (`.`).
    pub fn expand(&self, meta: MetaChar) -> Option<Symbol> {
        if let Some(cp) = meta.code_point() {
            return Some(Symbol::Char(Char::unicode(cp)));
        }
        let items = self.class_items(meta)?;
        Some(Symbol::CharSet(CharSet::new(
            items.to_vec(),
            meta.is_negated(),
        )))
    }

    pub(crate) fn class_includes(&self, meta: MetaChar, c: char) -> bool {
        let Some(items) = self.class_items(meta) else {
            return false;
        };
        items.iter().any(|item| item.includes(c)) != meta.is_negated()
    }
}
