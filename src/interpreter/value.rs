use crate::util::num::i64_to_f64;

/// Represents the result of evaluating an expression.
///
/// Literals are integers and integer arithmetic stays exact; division is true
/// division and produces a real, which then spreads through every operation
/// it takes part in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` in magnitude round to the nearest real.
    ///
    /// # Example
    /// ```
    /// use rdcalc::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Real(r) => r,
            Self::Integer(n) => i64_to_f64(n),
        }
    }

    /// Promotes both operands to reals.
    ///
    /// # Parameters
    /// - `other`: The right-hand operand.
    ///
    /// # Returns
    /// Both operands as reals, `self` first.
    #[must_use]
    pub const fn promote_to_real(self, other: Self) -> (f64, f64) {
        (self.as_real(), other.as_real())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
