use tracing::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            cursor::Cursor,
        },
    },
};

/// Parses a factor, the operand of `*` and `/`.
///
/// A factor is either an integer literal or a parenthesized expression. The
/// parenthesized form recurses into the full `expression` rule, resetting
/// precedence.
///
/// Grammar:
/// ```text
///     factor := INTEGER
///             | "(" expression ")"
/// ```
///
/// # Parameters
/// - `cursor`: Token cursor positioned where an operand is expected.
///
/// # Returns
/// An [`Expr::Literal`] or the tree of the parenthesized expression.
///
/// # Errors
/// - `UnexpectedToken` if the next token is an operator or `)`.
/// - `UnexpectedEndOfInput` if no tokens remain.
/// - Propagates errors from the parenthesized expression.
pub(crate) fn parse_factor(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    match cursor.advance() {
        Some((Token::Integer(value), span)) => Ok(Expr::Literal { value:    *value,
                                                                  position: span.start, }),
        Some((Token::LParen, span)) => parse_group(cursor, span.start),
        Some((token, span)) => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                                 position: span.start, }),
        None => Err(ParseError::UnexpectedEndOfInput { position: cursor.end() }),
    }
}

/// Parses the inside of a parenthesized group and its closing `)`.
///
/// The opening `(` at `open` has already been consumed.
///
/// # Errors
/// - `NestingTooDeep` if the group exceeds the cursor's depth limit.
/// - `ExpectedClosingParen` if the expression is not followed by `)`.
fn parse_group(cursor: &mut Cursor<'_>, open: usize) -> ParseResult<Expr> {
    cursor.enter_group(open)?;
    trace!(depth = cursor.depth(), position = open, "entering group");

    let expr = parse_expression(cursor)?;

    match cursor.advance() {
        Some((Token::RParen, _)) => {
            cursor.leave_group();
            Ok(expr)
        },
        Some((_, span)) => Err(ParseError::ExpectedClosingParen { position: span.start }),
        None => Err(ParseError::ExpectedClosingParen { position: cursor.end() }),
    }
}
