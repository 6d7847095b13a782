#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token where a number or `(` was expected.
    #[error("Error at position {position}: Unexpected token '{token}', expected a number or '('.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Character offset of the token.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Character offset one past the last token.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Character offset where the `)` was expected.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Extra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Character offset of the first extra token.
        position: usize,
    },
    /// Parentheses are nested deeper than the parser allows.
    #[error("Error at position {position}: Parentheses nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// Character offset of the `(` that exceeded the limit.
        position: usize,
    },
}

impl ParseError {
    /// Character offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}
