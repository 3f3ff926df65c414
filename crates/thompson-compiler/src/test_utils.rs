//! Helpers shared by the pass tests.

use std::fmt::Write;

use thompson_core::Expr;

use crate::lexer::{Token, TokenKind, lex};
use crate::{compile, parse, transform};

/// One token per line as `Kind "text"`, nested tokens indented.
pub fn dump_tokens(source: &str, tokens: &[Token]) -> String {
    fn walk(source: &str, tokens: &[Token], depth: usize, out: &mut String) {
        for token in tokens {
            let text = &source[token.span.range()];
            let indent = "  ".repeat(depth);
            writeln!(out, "{indent}{} \"{text}\"", token.kind.name()).unwrap();
            if let TokenKind::CharSet(inner) | TokenKind::Group(inner) = &token.kind {
                walk(source, inner, depth + 1, out);
            }
        }
    }

    let mut out = String::new();
    walk(source, tokens, 0, &mut out);
    out
}

pub fn parse_str(pattern: &str) -> Option<Expr> {
    let tokens = lex(pattern).unwrap();
    parse(&tokens).unwrap()
}

pub fn normalize_str(pattern: &str) -> Option<Expr> {
    parse_str(pattern).map(|expr| transform(&expr).unwrap())
}

/// State table of a pattern, one state per line, then the entry and exit.
pub fn states(pattern: &str) -> String {
    let expr = normalize_str(pattern);
    let automaton = compile(expr.as_ref()).unwrap();
    let mut out = String::new();
    for state in automaton.states() {
        writeln!(out, "{state}").unwrap();
    }
    write!(
        out,
        "in: {}, out: {}",
        automaton.in_state(),
        automaton.out_state()
    )
    .unwrap();
    out
}
