use thompson_core::Quantifier;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// `{m,n}`, `{m}` and `{m,}` are parsed but never unrolled.
    #[error("bounded repetition `{quantifier}` is not supported")]
    UnsupportedQuantifier { quantifier: Quantifier },

    #[error("{node} cannot be compiled")]
    UnsupportedNode { node: String },
}
