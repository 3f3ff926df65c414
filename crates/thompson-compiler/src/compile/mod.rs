//! Thompson construction: one fragment per tree node.
//!
//! Every fragment has a single entry and a single accepting exit. Composing
//! operators wire sub-fragments together with epsilon edges and clear the
//! accept flag of each exit they wire onward, so the finished automaton has
//! exactly one accepting state.
//!
//! Transitions are tried in the order they are added. Greedy and lazy
//! quantifiers differ only in that order.

mod error;
mod quantifier;


pub use error::CompileError;

use thompson_core::{Automaton, Expr, State, StateId, Symbol};

/// Compiles a normalized tree. `None` (the empty pattern) accepts only the
/// empty string.
pub fn compile(expr: Option<&Expr>) -> Result<Automaton, CompileError> {
    let mut compiler = Compiler::default();
    let fragment = match expr {
        Some(expr) => compiler.expr(expr)?,
        None => compiler.empty(),
    };
    debug_assert_eq!(
        compiler.states.iter().filter(|s| s.accept).count(),
        1,
        "exactly one accepting state"
    );
    Ok(Automaton::new(compiler.states, fragment.entry, fragment.exit))
}

/// Entry and exit of a partially built automaton.
#[derive(Clone, Copy, Debug)]
struct Fragment {
    entry: StateId,
    exit: StateId,
}

#[derive(Default)]
struct Compiler {
    states: Vec<State>,
}

impl Compiler {
    fn new_state(&mut self, accept: bool) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(State::new(id, accept));
        id
    }

    fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.index()]
    }

    fn epsilon(&mut self, from: StateId, to: StateId) {
        self.state_mut(from).add_epsilon(to);
    }

    /// Epsilon edge out of a fragment exit, which stops accepting.
    fn continue_from(&mut self, exit: StateId, to: StateId) {
        let state = self.state_mut(exit);
        state.accept = false;
        state.add_epsilon(to);
    }

    fn expr(&mut self, expr: &Expr) -> Result<Fragment, CompileError> {
        match expr {
            Expr::Symbol(symbol) => Ok(self.symbol(symbol)),
            Expr::Alternative(items) => self.alternative(items),
            Expr::Disjunction(items) => self.disjunction(items),
            Expr::Group(group) => {
                let inner = match group.expr.as_deref() {
                    Some(inner) => self.expr(inner)?,
                    None => self.empty(),
                };
                Ok(self.wrap(inner))
            }
            Expr::Repetition { expr, quantifier } => {
                let inner = self.expr(expr)?;
                self.repetition(inner, *quantifier)
            }
            Expr::LookAround { .. } => Err(CompileError::UnsupportedNode {
                node: format!("look-around assertion `{expr}`"),
            }),
        }
    }

    /// Matches the empty string only.
    fn empty(&mut self) -> Fragment {
        let entry = self.new_state(false);
        let exit = self.new_state(true);
        self.epsilon(entry, exit);
        Fragment { entry, exit }
    }

    fn symbol(&mut self, symbol: &Symbol) -> Fragment {
        let entry = self.new_state(false);
        let exit = self.new_state(true);
        self.state_mut(entry).add_symbol(symbol.clone(), exit);
        Fragment { entry, exit }
    }

    fn alternative(&mut self, items: &[Expr]) -> Result<Fragment, CompileError> {
        let Some((first, rest)) = items.split_first() else {
            return Ok(self.empty());
        };
        let head = self.expr(first)?;
        let mut exit = head.exit;
        for item in rest {
            let next = self.expr(item)?;
            self.continue_from(exit, next.entry);
            exit = next.exit;
        }
        Ok(Fragment {
            entry: head.entry,
            exit,
        })
    }

    fn disjunction(&mut self, items: &[Expr]) -> Result<Fragment, CompileError> {
        let branches = items
            .iter()
            .map(|item| self.expr(item))
            .collect::<Result<Vec<_>, _>>()?;
        let entry = self.new_state(false);
        let exit = self.new_state(true);
        for branch in &branches {
            self.epsilon(entry, branch.entry);
        }
        for branch in &branches {
            self.continue_from(branch.exit, exit);
        }
        Ok(Fragment { entry, exit })
    }

    /// New entry and exit around `inner`, as for a group.
    fn wrap(&mut self, inner: Fragment) -> Fragment {
        let entry = self.new_state(false);
        let exit = self.new_state(true);
        self.epsilon(entry, inner.entry);
        self.continue_from(inner.exit, exit);
        Fragment { entry, exit }
    }
}
