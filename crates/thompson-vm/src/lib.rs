#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime for compiled Thompson automata.
//!
//! `Matcher` walks an `Automaton` with an explicit backtracking stack and
//! reports every step to a `Tracer`.

pub mod engine;

pub use engine::{Matcher, NoopTracer, PrintTracer, Tracer};
