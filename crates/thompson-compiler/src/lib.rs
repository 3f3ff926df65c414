//! Thompson compiler: from pattern text to NFA.
//!
//! Each pass has its own error type:
//! - `lexer` - pattern text to tokens
//! - `parser` - tokens to syntax tree, nesting groups first
//! - `transform` - syntax tree normalization
//! - `compile` - Thompson NFA construction

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod lexer;
pub mod parser;
pub mod transform;

#[cfg(test)]
mod test_utils;

pub use compile::{CompileError, compile};
pub use lexer::{LexError, Quantity, QuantityKind, Token, TokenKind, lex};
pub use parser::{GroupFeature, ParseError, parse, refactor};
pub use transform::{TransformError, transform};
