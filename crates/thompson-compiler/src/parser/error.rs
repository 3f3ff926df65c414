use std::fmt::{self, Display, Formatter};

use thompson_core::Span;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unbalanced parenthesis")]
    UnbalancedGroup { span: Span },

    #[error("`|` needs an expression on both sides")]
    InvalidDisjunction { span: Span },

    #[error("unsupported group syntax: {feature}")]
    UnsupportedGroupFeature { feature: GroupFeature, span: Span },

    #[error("invalid token in this position: {found}")]
    UnexpectedToken { found: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnbalancedGroup { span }
            | Self::InvalidDisjunction { span }
            | Self::UnsupportedGroupFeature { span, .. }
            | Self::UnexpectedToken { span, .. } => *span,
        }
    }
}

/// Group syntax recognized after `(?` but not supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupFeature {
    NonCapturing,
    Named,
    LookAhead,
    LookBehind,
    Unknown,
}

impl Display for GroupFeature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NonCapturing => "non-capturing group `(?:...)`",
            Self::Named => "named group `(?<name>...)`",
            Self::LookAhead => "lookahead `(?=...)`",
            Self::LookBehind => "lookbehind `(?<=...)`",
            Self::Unknown => "group modifier `(?...)`",
        })
    }
}
