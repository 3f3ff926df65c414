//! Quantifier wiring.
//!
//! Greedy forms add edges to the inner fragment only. Lazy forms add a fresh
//! entry or exit so that the edge leaving the loop is tried first:
//!
//! - `+?`: exit → new exit, then exit → entry
//! - `??`: new entry → exit, then new entry → entry
//! - `*?`: new entry → new exit, new entry → entry, exit → new exit, exit → entry

use thompson_core::Quantifier;

use super::{CompileError, Compiler, Fragment};

impl Compiler {
    pub(super) fn repetition(
        &mut self,
        inner: Fragment,
        quantifier: Quantifier,
    ) -> Result<Fragment, CompileError> {
        let Fragment { entry, exit } = inner;
        Ok(match quantifier {
            Quantifier::OneOrMore { greedy: true } => {
                self.epsilon(exit, entry);
                inner
            }
            Quantifier::OneOrMore { greedy: false } => {
                let new_exit = self.new_state(true);
                self.continue_from(exit, new_exit);
                self.epsilon(exit, entry);
                Fragment {
                    entry,
                    exit: new_exit,
                }
            }
            Quantifier::OneOrZero { greedy: true } => {
                self.epsilon(entry, exit);
                inner
            }
            Quantifier::OneOrZero { greedy: false } => {
                let new_entry = self.new_state(false);
                self.epsilon(new_entry, exit);
                self.epsilon(new_entry, entry);
                Fragment {
                    entry: new_entry,
                    exit,
                }
            }
            Quantifier::ZeroOrMore { greedy: true } => {
                self.epsilon(entry, exit);
                self.epsilon(exit, entry);
                inner
            }
            Quantifier::ZeroOrMore { greedy: false } => {
                let new_entry = self.new_state(false);
                let new_exit = self.new_state(true);
                self.epsilon(new_entry, new_exit);
                self.epsilon(new_entry, entry);
                self.continue_from(exit, new_exit);
                self.epsilon(exit, entry);
                Fragment {
                    entry: new_entry,
                    exit: new_exit,
                }
            }
            Quantifier::Range { .. }
            | Quantifier::ManyTimes(_)
            | Quantifier::ManyTimesOrMore { .. } => {
                return Err(CompileError::UnsupportedQuantifier { quantifier });
            }
        })
    }
}
