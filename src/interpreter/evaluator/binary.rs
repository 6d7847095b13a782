use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
    util::num::div_i64_to_f64,
};

/// Evaluates a binary arithmetic operation between two values.
///
/// `+`, `-` and `*` on two integers stay integers and are checked for
/// overflow. `/` is always true division and yields a real; between two
/// integers it is computed from the exact quotient and remainder. Every other
/// combination is promoted to reals.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Character offset of the operator, for error reporting.
///
/// # Errors
/// - `DivisionByZero` when the right operand of `/` is zero.
/// - `Overflow` when an integer result does not fit in an `i64`, or a real
///   result is not finite.
///
/// # Example
/// ```
/// use rdcalc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4), 0);
/// assert_eq!(sum, Ok(Value::Integer(7)));
///
/// let quotient = eval_binary(BinaryOperator::Div, Value::Integer(7), Value::Integer(2), 0);
/// assert_eq!(quotient, Ok(Value::Real(3.5)));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Value,
                   right: Value,
                   position: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Value::Integer;

    let checked = match (op, left, right) {
        (Add, Integer(a), Integer(b)) => a.checked_add(b),
        (Sub, Integer(a), Integer(b)) => a.checked_sub(b),
        (Mul, Integer(a), Integer(b)) => a.checked_mul(b),
        (Div, Integer(a), Integer(b)) => {
            return div_i64_to_f64(a, b).map(Value::Real)
                                       .ok_or(RuntimeError::DivisionByZero { position });
        },
        _ => {
            let (left, right) = left.promote_to_real(right);
            return eval_real_op(op, left, right, position);
        },
    };

    checked.map(Integer)
           .ok_or(RuntimeError::Overflow { position })
}

/// Evaluates an operation on two reals.
///
/// Division by zero is checked explicitly; `-0.0` counts as zero.
fn eval_real_op(op: BinaryOperator, left: f64, right: f64, position: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            left / right
        },
    };

    if !result.is_finite() {
        return Err(RuntimeError::Overflow { position });
    }

    Ok(Value::Real(result))
}
