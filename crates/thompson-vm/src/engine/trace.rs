//! Tracing hooks for matcher execution.
//!
//! The matcher is generic over `Tracer`. With `NoopTracer` every hook is an
//! empty `#[inline(always)]` function, so the calls and their arguments are
//! compiled out. `PrintTracer` collects one line per step for the CLI.
//!
//! Each line starts with the input position, `@<pos>`:
//!
//! ```text
//! @0 enter 0
//! @0 0: "a" -> 1
//! @1 enter 1
//! @1 accept 1
//! ```

use thompson_core::{Colors, StateId, Symbol};

/// Observer of matcher steps.
///
/// - `trace_enter` - a frame was pushed for `state`
/// - `trace_symbol` - a symbol transition consumed `c`
/// - `trace_epsilon` - an epsilon transition was followed
/// - `trace_cycle` - an epsilon transition was skipped by the cycle guard
/// - `trace_backtrack` - a frame ran out of transitions and was popped
/// - `trace_accept` - the input ended in an accepting state
pub trait Tracer {
    fn trace_enter(&mut self, pos: usize, state: StateId);

    fn trace_symbol(
        &mut self,
        pos: usize,
        from: StateId,
        symbol: &Symbol,
        c: char,
        target: StateId,
    );

    fn trace_epsilon(&mut self, pos: usize, from: StateId, target: StateId);

    fn trace_cycle(&mut self, pos: usize, from: StateId, target: StateId);

    fn trace_backtrack(&mut self, pos: usize, state: StateId);

    fn trace_accept(&mut self, pos: usize, state: StateId);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _pos: usize, _state: StateId) {}

    #[inline(always)]
    fn trace_symbol(
        &mut self,
        _pos: usize,
        _from: StateId,
        _symbol: &Symbol,
        _c: char,
        _target: StateId,
    ) {
    }

    #[inline(always)]
    fn trace_epsilon(&mut self, _pos: usize, _from: StateId, _target: StateId) {}

    #[inline(always)]
    fn trace_cycle(&mut self, _pos: usize, _from: StateId, _target: StateId) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _pos: usize, _state: StateId) {}

    #[inline(always)]
    fn trace_accept(&mut self, _pos: usize, _state: StateId) {}
}

/// Tracer that collects a readable execution log.
#[derive(Debug, Default)]
pub struct PrintTracer {
    /// Collected trace lines.
    lines: Vec<String>,
    /// Color palette.
    colors: Colors,
}

impl PrintTracer {
    pub fn new(colors: Colors) -> Self {
        Self {
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn push(&mut self, pos: usize, content: String) {
        let c = self.colors;
        self.lines.push(format!("{}@{pos}{} {content}", c.dim, c.reset));
    }

    fn state(&self, id: StateId) -> String {
        format!("{}{id}{}", self.colors.blue, self.colors.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, pos: usize, state: StateId) {
        let content = format!("enter {}", self.state(state));
        self.push(pos, content);
    }

    fn trace_symbol(
        &mut self,
        pos: usize,
        from: StateId,
        symbol: &Symbol,
        _c: char,
        target: StateId,
    ) {
        let c = self.colors;
        let content = format!(
            "{}: {}\"{symbol}\"{} -> {}",
            self.state(from),
            c.green,
            c.reset,
            self.state(target)
        );
        self.push(pos, content);
    }

    fn trace_epsilon(&mut self, pos: usize, from: StateId, target: StateId) {
        let content = format!("{}: ε -> {}", self.state(from), self.state(target));
        self.push(pos, content);
    }

    fn trace_cycle(&mut self, pos: usize, from: StateId, target: StateId) {
        let c = self.colors;
        let content = format!(
            "{}: ε -> {} {}(cycle){}",
            self.state(from),
            self.state(target),
            c.dim,
            c.reset
        );
        self.push(pos, content);
    }

    fn trace_backtrack(&mut self, pos: usize, state: StateId) {
        let c = self.colors;
        let content = format!("{}backtrack{} {}", c.red, c.reset, self.state(state));
        self.push(pos, content);
    }

    fn trace_accept(&mut self, pos: usize, state: StateId) {
        let c = self.colors;
        let content = format!("{}accept{} {}", c.green, c.reset, self.state(state));
        self.push(pos, content);
    }
}
