//! NFA produced by the compiler.
//!
//! States live in one flat arena and address each other by index, which
//! keeps the cyclic graph free of shared ownership. Indices are assigned in
//! creation order and never reused.

use std::fmt::{self, Display, Formatter, Write};

use serde::Serialize;

use crate::Colors;
use crate::ast::Symbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StateId(pub u32);

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Transition {
    /// Taken without consuming input.
    Epsilon { target: StateId },
    /// Consumes one character accepted by `symbol`.
    Symbol { symbol: Symbol, target: StateId },
}

impl Transition {
    pub fn target(&self) -> StateId {
        match self {
            Self::Epsilon { target } | Self::Symbol { target, .. } => *target,
        }
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon { .. })
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epsilon { target } => write!(f, "ε -> {target}"),
            Self::Symbol { symbol, target } => write!(f, "\"{symbol}\" -> {target}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct State {
    pub id: StateId,
    pub accept: bool,
    /// Tried in order; the order encodes greedy versus lazy.
    pub transitions: Vec<Transition>,
}

impl State {
    pub fn new(id: StateId, accept: bool) -> Self {
        Self {
            id,
            accept,
            transitions: Vec::new(),
        }
    }

    pub fn add_epsilon(&mut self, target: StateId) {
        self.transitions.push(Transition::Epsilon { target });
    }

    pub fn add_symbol(&mut self, symbol: Symbol, target: StateId) {
        self.transitions.push(Transition::Symbol { symbol, target });
    }

    /// `<index>` or `<index>*` for an accepting state.
    pub fn heading(&self) -> String {
        if self.accept {
            format!("{}*", self.id)
        } else {
            self.id.to_string()
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.heading(), Transitions(&self.transitions))
    }
}

/// Transitions joined with `, `, or `[]` when there are none.
struct Transitions<'a>(&'a [Transition]);

impl Display for Transitions<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("[]");
        }
        for (i, transition) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{transition}")?;
        }
        Ok(())
    }
}

/// Compiled pattern: the state arena plus its entry and exit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Automaton {
    states: Vec<State>,
    in_state: StateId,
    out_state: StateId,
}

impl Automaton {
    pub fn new(states: Vec<State>, in_state: StateId, out_state: StateId) -> Self {
        Self {
            states,
            in_state,
            out_state,
        }
    }

    pub fn in_state(&self) -> StateId {
        self.in_state
    }

    pub fn out_state(&self) -> StateId {
        self.out_state
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State table with right-aligned headings, then the entry and exit.
    pub fn dump(&self) -> String {
        self.dump_with(Colors::OFF)
    }

    /// [`Automaton::dump`] with state headings and indices colored.
    pub fn dump_with(&self, colors: Colors) -> String {
        let Colors {
            blue, dim, reset, ..
        } = colors;
        let mut out = String::new();
        for state in &self.states {
            let transitions = Transitions(&state.transitions);
            writeln!(out, "{blue}{:>4}{reset}: {transitions}", state.heading()).unwrap();
        }
        writeln!(out, "{dim}in state:{reset} {}", self.in_state).unwrap();
        write!(out, "{dim}out state:{reset} {}", self.out_state).unwrap();
        out
    }
}
