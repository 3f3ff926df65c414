#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the Thompson regex engine.
//!
//! - `ast`: pattern syntax tree and its canonical rendering
//! - `meta`: definition table for `\s`, `\w`, `\d` and control escapes
//! - `builder`: fluent construction of syntax trees by hand
//! - `automaton`: NFA states and transitions addressed by index

pub mod ast;
pub mod automaton;
pub mod builder;
pub mod meta;

mod colors;
mod span;


pub use ast::{
    Char, CharRange, CharSet, Expr, Group, LookAroundKind, MetaChar, Quantifier, SetItem, Symbol,
};
pub use automaton::{Automaton, State, StateId, Transition};
pub use builder::Builder;
pub use colors::Colors;
pub use span::Span;
