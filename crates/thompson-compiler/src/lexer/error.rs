use thompson_core::Span;

/// Malformed pattern text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated character set: missing `]`")]
    UnterminatedCharSet { span: Span },

    #[error("unterminated quantifier: missing `}}`")]
    UnterminatedQuantity { span: Span },

    #[error("empty quantifier `{{}}`")]
    EmptyQuantity { span: Span },

    #[error("quantifier is missing its lower bound")]
    MissingLowerBound { span: Span },

    #[error("{}", unsupported_escape(.target))]
    UnsupportedEscape { target: Option<char>, span: Span },

    #[error("unicode escape must be `\\u{{hhhh}}` or `\\u{{hhhhhh}}`")]
    InvalidUnicodeEscape { span: Span },

    #[error("invalid hex digits in unicode escape")]
    InvalidHexDigits { span: Span },

    #[error("unicode escape has no hex digits")]
    BlankHexDigits { span: Span },

    #[error("code point is above U+10FFFF")]
    CodePointOutOfRange { span: Span },

    #[error("invalid decimal digits in quantifier")]
    InvalidDecimalDigits { span: Span },

    #[error("quantifier bound has no digits")]
    BlankDecimalDigits { span: Span },
}

fn unsupported_escape(target: &Option<char>) -> String {
    match target {
        Some(c) => format!("unsupported escape `\\{c}`"),
        None => "pattern ends with a lone `\\`".to_string(),
    }
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedCharSet { span }
            | Self::UnterminatedQuantity { span }
            | Self::EmptyQuantity { span }
            | Self::MissingLowerBound { span }
            | Self::UnsupportedEscape { span, .. }
            | Self::InvalidUnicodeEscape { span }
            | Self::InvalidHexDigits { span }
            | Self::BlankHexDigits { span }
            | Self::CodePointOutOfRange { span }
            | Self::InvalidDecimalDigits { span }
            | Self::BlankDecimalDigits { span } => *span,
        }
    }
}
