use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, cursor::Cursor, primary::parse_factor},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. Each new operand
/// is folded onto the tree built so far, so `a - b - c` parses as
/// `(a - b) - c`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(cursor)?;
    loop {
        if let Some((token, span)) = cursor.peek()
           && let Some(op) = token_to_binary_operator(token)
           && !op.is_multiplicative()
        {
            cursor.advance();
            let right = parse_multiplicative(cursor)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: span.start };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which bind tighter than
/// the additive tier.
///
/// The rule is: `multiplicative := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_factor(cursor)?;
    loop {
        if let Some((token, span)) = cursor.peek()
           && let Some(op) = token_to_binary_operator(token)
           && op.is_multiplicative()
        {
            cursor.advance();
            let right = parse_factor(cursor)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: span.start };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for `+`, `-`, `*` and `/`, and `None` for
/// integers and parentheses.
///
/// # Example
/// ```
/// use rdcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Integer(_) | Token::LParen | Token::RParen => None,
    }
}
