#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that is not whitespace, a digit, or an operator.
    #[error("Error at position {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character offset in the source.
        position:  usize,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    #[error("Error at position {position}: Integer literal {literal} is too large.")]
    IntegerOverflow {
        /// The digits of the literal as written.
        literal:  String,
        /// Zero-based character offset of the literal's first digit.
        position: usize,
    },
}

impl LexError {
    /// Character offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } | Self::IntegerOverflow { position, .. } => {
                *position
            },
        }
    }
}
