//! Automaton execution.

mod matcher;
mod trace;


pub use matcher::Matcher;
pub use trace::{NoopTracer, PrintTracer, Tracer};
