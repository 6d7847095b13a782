#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The right operand of a division evaluated to zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Character offset of the `/` operator.
        position: usize,
    },
    /// Integer arithmetic overflowed, or a real result was not finite.
    #[error("Error at position {position}: Arithmetic overflow while trying to compute result.")]
    Overflow {
        /// Character offset of the operator.
        position: usize,
    },
}

impl RuntimeError {
    /// Character offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::Overflow { position } => *position,
        }
    }
}
