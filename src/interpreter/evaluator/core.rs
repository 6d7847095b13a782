use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Pending work of the tree walk.
enum Step<'a> {
    /// Evaluate a subtree and push its value.
    Visit(&'a Expr),
    /// Pop two operands, combine them, and push the result.
    Apply(BinaryOperator, usize),
}

/// Evaluates an expression tree and returns the resulting value.
///
/// Literals evaluate to themselves. A binary operation evaluates its left
/// operand, then its right operand, then combines them with
/// [`eval_binary`]. Nothing is cached: every call walks the whole subtree.
///
/// The walk is post-order over an explicit stack, so a tree as deep as a
/// million-term chain evaluates in constant call-stack space.
///
/// # Errors
/// Propagates the first [`RuntimeError`] raised anywhere in the tree, such as
/// division by zero.
///
/// # Example
/// ```
/// use rdcalc::{
///     error::RuntimeError,
///     interpreter::{
///         evaluator::core::evaluate, lexer::tokenize, parser::core::parse, value::Value,
///     },
/// };
///
/// let ast = parse(&tokenize("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(evaluate(&ast), Ok(Value::Integer(14)));
///
/// let ast = parse(&tokenize("1 / 0").unwrap()).unwrap();
/// assert_eq!(evaluate(&ast),
///            Err(RuntimeError::DivisionByZero { position: 2 }));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    let mut steps = vec![Step::Visit(expr)];
    let mut values = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Expr::Literal { value, .. }) => values.push(Value::Integer(*value)),
            Step::Visit(Expr::BinaryOp { left,
                                         op,
                                         right,
                                         position, }) => {
                steps.extend([Step::Apply(*op, *position), Step::Visit(right), Step::Visit(left)]);
            },
            Step::Apply(op, position) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    unreachable!("both operands are evaluated before their operator");
                };
                values.push(eval_binary(op, left, right, position)?);
            },
        }
    }

    match values.pop() {
        Some(value) => Ok(value),
        None => unreachable!("the root always leaves one value"),
    }
}
