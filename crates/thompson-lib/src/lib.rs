//! Thompson: backtracking NFA regular expressions.
//!
//! A pattern goes through four passes (lex, parse, transform, compile) into
//! an automaton, which the matcher then runs against whole strings.
//!
//! # Example
//!
//! ```
//! assert!(thompson_lib::test("(ab)*c", "ababc").unwrap());
//! assert!(!thompson_lib::test("(ab)*c", "abac").unwrap());
//!
//! let err = thompson_lib::test("a{2}", "aa").unwrap_err();
//! eprintln!("{}", err.printer().source("a{2}").render());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;

#[cfg(test)]
mod lib_tests;

pub use diagnostics::ErrorPrinter;
pub use thompson_compiler::{
    CompileError, GroupFeature, LexError, ParseError, Quantity, QuantityKind, Token, TokenKind,
    TransformError,
};
pub use thompson_core::{
    Automaton, Builder, Char, CharRange, CharSet, Colors, Expr, Group, LookAroundKind, MetaChar,
    Quantifier, SetItem, Span, State, StateId, Symbol, Transition,
};
pub use thompson_vm::{Matcher, NoopTracer, PrintTracer, Tracer};

/// Any failure between pattern text and a runnable automaton.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

impl Error {
    /// Location in the pattern, for errors raised before the tree exists.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Lex(e) => Some(e.span()),
            Self::Parse(e) => Some(e.span()),
            Self::Transform(_) | Self::Compile(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn lex(pattern: &str) -> Result<Vec<Token>> {
    Ok(thompson_compiler::lex(pattern)?)
}

/// Parser output before normalization. `None` is the empty pattern.
pub fn parse(pattern: &str) -> Result<Option<Expr>> {
    let tokens = thompson_compiler::lex(pattern)?;
    Ok(thompson_compiler::parse(&tokens)?)
}

/// Parsed and normalized tree, as handed to the compiler.
pub fn normalize(pattern: &str) -> Result<Option<Expr>> {
    let Some(expr) = parse(pattern)? else {
        return Ok(None);
    };
    Ok(Some(thompson_compiler::transform(&expr)?))
}

pub fn compile(pattern: &str) -> Result<Automaton> {
    let expr = normalize(pattern)?;
    Ok(thompson_compiler::compile(expr.as_ref())?)
}

/// Whether `candidate` matches `pattern` as a whole.
///
/// Builds the automaton on every call. Compile once with [`compile`] and
/// reuse a [`Matcher`] to test many inputs.
pub fn test(pattern: &str, candidate: &str) -> Result<bool> {
    let automaton = compile(pattern)?;
    Ok(Matcher::new(&automaton).is_match(candidate))
}
