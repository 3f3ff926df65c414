//! Normalizes a parsed tree into what the compiler accepts.
//!
//! - control escapes become unicode chars;
//! - class escapes become char sets from the definition table, spliced into
//!   an enclosing set when they appear inside one;
//! - `{m,m}` becomes `{m}`.
//!
//! The output has the same shape as the input and transforming it again
//! changes nothing.

#[cfg(test)]
mod transform_tests;

use thompson_core::meta::{self, MetaTable};
use thompson_core::{CharSet, Expr, Group, MetaChar, Quantifier, SetItem, Symbol};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("meta character `{meta}` is not supported")]
    UnsupportedMetaChar { meta: MetaChar },

    #[error("`{meta}` cannot be used inside a character set")]
    UnsupportedNestedMeta { meta: MetaChar },
}

pub fn transform(expr: &Expr) -> Result<Expr, TransformError> {
    Transformer {
        table: meta::table(),
    }
    .expr(expr)
}

struct Transformer {
    table: &'static MetaTable,
}

impl Transformer {
    fn expr(&self, expr: &Expr) -> Result<Expr, TransformError> {
        Ok(match expr {
            Expr::Symbol(symbol) => Expr::Symbol(self.symbol(symbol)?),
            Expr::Alternative(items) => Expr::Alternative(self.all(items)?),
            Expr::Disjunction(items) => Expr::Disjunction(self.all(items)?),
            Expr::Group(group) => Expr::Group(Group {
                expr: self.boxed(group.expr.as_deref())?,
                number: group.number,
                name: group.name.clone(),
                capturing: group.capturing,
            }),
            Expr::Repetition { expr, quantifier } => {
                Expr::repetition(self.expr(expr)?, canonical(*quantifier))
            }
            Expr::LookAround {
                kind,
                negative,
                expr,
            } => Expr::LookAround {
                kind: *kind,
                negative: *negative,
                expr: Box::new(self.expr(expr)?),
            },
        })
    }

    fn all(&self, items: &[Expr]) -> Result<Vec<Expr>, TransformError> {
        items.iter().map(|item| self.expr(item)).collect()
    }

    fn boxed(&self, expr: Option<&Expr>) -> Result<Option<Box<Expr>>, TransformError> {
        expr.map(|expr| self.expr(expr).map(Box::new)).transpose()
    }

    fn symbol(&self, symbol: &Symbol) -> Result<Symbol, TransformError> {
        match symbol {
            Symbol::Char(ch) => Ok(Symbol::Char(*ch)),
            Symbol::Meta(meta) => self.meta(*meta),
            Symbol::CharSet(set) => self.char_set(set).map(Symbol::CharSet),
        }
    }

    fn meta(&self, meta: MetaChar) -> Result<Symbol, TransformError> {
        reject_unsupported(meta)?;
        self.table
            .expand(meta)
            .ok_or(TransformError::UnsupportedMetaChar { meta })
    }

    fn char_set(&self, set: &CharSet) -> Result<CharSet, TransformError> {
        let mut items = Vec::with_capacity(set.items.len());
        for item in &set.items {
            let SetItem::Meta(meta) = *item else {
                items.push(*item);
                continue;
            };
            reject_unsupported(meta)?;
            if meta.is_negated() {
                return Err(TransformError::UnsupportedNestedMeta { meta });
            }
            match self.table.class_items(meta) {
                Some(class) => items.extend_from_slice(class),
                None => match self.table.expand(meta) {
                    Some(Symbol::Char(ch)) => items.push(SetItem::Char(ch)),
                    _ => return Err(TransformError::UnsupportedMetaChar { meta }),
                },
            }
        }
        Ok(CharSet::new(items, set.negative))
    }
}

/// `.`, `\b` and `\0` have no normalized form.
fn reject_unsupported(meta: MetaChar) -> Result<(), TransformError> {
    match meta {
        MetaChar::Dot | MetaChar::Backspace | MetaChar::Null => {
            Err(TransformError::UnsupportedMetaChar { meta })
        }
        _ => Ok(()),
    }
}

fn canonical(quantifier: Quantifier) -> Quantifier {
    match quantifier {
        Quantifier::Range { from, to, .. } if from == to => Quantifier::ManyTimes(from),
        other => other,
    }
}
