pub mod ast;
pub mod lex;
pub mod matches;
pub mod run_common;
pub mod states;
pub mod trace;
