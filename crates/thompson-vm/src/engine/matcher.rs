//! Backtracking search over an automaton.
//!
//! A match is a path from the in-state that consumes the whole input and
//! stops in an accepting state. Transitions are tried in declaration order,
//! so greedy and lazy quantifiers differ only in which path is found first.
//!
//! The search keeps its own frame stack instead of recursing, so input length
//! does not grow the native stack.

use thompson_core::{Automaton, StateId, Transition};

use super::trace::{NoopTracer, Tracer};

/// Matches whole strings against a compiled automaton.
///
/// Holds no mutable state; one automaton can serve many concurrent matches.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'a> {
    automaton: &'a Automaton,
}

/// One state on the current search path.
#[derive(Clone, Copy, Debug)]
struct Frame {
    state: StateId,
    /// Input position in chars.
    pos: usize,
    /// Index of the next transition to try.
    next: usize,
    /// Reached by consuming a char (or the root frame). Bounds the epsilon
    /// run checked by the cycle guard.
    entered_by_symbol: bool,
}

impl<'a> Matcher<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self { automaton }
    }

    /// True when the automaton accepts the whole of `input`.
    pub fn is_match(&self, input: &str) -> bool {
        self.is_match_with(input, &mut NoopTracer)
    }

    /// Same as [`Matcher::is_match`], reporting each step to `tracer`.
    pub fn is_match_with<T: Tracer>(&self, input: &str, tracer: &mut T) -> bool {
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();

        let root = self.automaton.in_state();
        tracer.trace_enter(0, root);
        if len == 0 && self.automaton.state(root).accept {
            tracer.trace_accept(0, root);
            return true;
        }

        let mut stack = vec![Frame {
            state: root,
            pos: 0,
            next: 0,
            entered_by_symbol: true,
        }];

        while let Some(frame) = stack.last_mut() {
            let state = self.automaton.state(frame.state);
            let Some(transition) = state.transitions.get(frame.next) else {
                tracer.trace_backtrack(frame.pos, frame.state);
                stack.pop();
                continue;
            };
            frame.next += 1;
            let (from, pos) = (frame.state, frame.pos);

            let next = match transition {
                Transition::Symbol { symbol, target } => {
                    // Only epsilon edges apply once the input is exhausted.
                    let Some(&c) = chars.get(pos) else {
                        continue;
                    };
                    if !symbol.includes(c) {
                        continue;
                    }
                    tracer.trace_symbol(pos, from, symbol, c, *target);
                    Frame {
                        state: *target,
                        pos: pos + 1,
                        next: 0,
                        entered_by_symbol: true,
                    }
                }
                Transition::Epsilon { target } => {
                    if in_epsilon_run(&stack, *target) {
                        tracer.trace_cycle(pos, from, *target);
                        continue;
                    }
                    tracer.trace_epsilon(pos, from, *target);
                    Frame {
                        state: *target,
                        pos,
                        next: 0,
                        entered_by_symbol: false,
                    }
                }
            };

            tracer.trace_enter(next.pos, next.state);
            if next.pos == len && self.automaton.state(next.state).accept {
                tracer.trace_accept(next.pos, next.state);
                return true;
            }
            stack.push(next);
        }

        false
    }
}

/// Whether `target` was already left via an epsilon edge since the last
/// consumed char. That run is the top of the stack down to and including the
/// nearest symbol-entered frame.
fn in_epsilon_run(stack: &[Frame], target: StateId) -> bool {
    for frame in stack.iter().rev() {
        if frame.state == target {
            return true;
        }
        if frame.entered_by_symbol {
            break;
        }
    }
    false
}
