use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Spanned,
        parser::{binary::parse_additive, cursor::Cursor},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply parentheses may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs controlling how permissive the parser is.
///
/// The defaults keep the classic behaviour of the grammar: anything left over
/// after a complete expression is ignored. [`ParserOptions::strict`] turns
/// leftovers into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Fail with [`ParseError::UnexpectedTrailingTokens`] instead of ignoring
    /// tokens after the top-level expression.
    pub reject_trailing: bool,
    /// Maximum number of simultaneously open parentheses.
    pub max_depth:       usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { reject_trailing: false,
               max_depth:       DEFAULT_MAX_DEPTH, }
    }
}

impl ParserOptions {
    /// Options that reject trailing tokens, with the default nesting limit.
    #[must_use]
    pub fn strict() -> Self {
        Self { reject_trailing: true,
               ..Self::default() }
    }
}

/// Parses a full expression.
///
/// This is the `expression` rule of the grammar. It begins at the
/// lowest-precedence tier, addition and subtraction, and recursively descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    parse_additive(cursor)
}

/// Parses a token sequence with the default, lenient [`ParserOptions`].
///
/// Tokens after the first complete expression are ignored, so `1 + 2 )`
/// parses as `1 + 2`.
///
/// # Errors
/// Returns a [`ParseError`] when the tokens do not start with a well-formed
/// expression.
///
/// # Example
/// ```
/// use rdcalc::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let ast = parse(&tokenize("10 - 2 - 3").unwrap()).unwrap();
/// assert_eq!(ast.to_string(), "((10 - 2) - 3)");
///
/// let err = parse(&tokenize("(1 + 2").unwrap()).unwrap_err();
/// assert_eq!(err, ParseError::ExpectedClosingParen { position: 6 });
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Expr> {
    parse_with(tokens, &ParserOptions::default())
}

/// Parses a token sequence with explicit [`ParserOptions`].
///
/// # Errors
/// Everything [`parse`] reports, plus
/// [`ParseError::UnexpectedTrailingTokens`] when `reject_trailing` is set and
/// [`ParseError::NestingTooDeep`] when parentheses nest beyond `max_depth`.
///
/// # Example
/// ```
/// use rdcalc::interpreter::{
///     lexer::tokenize,
///     parser::core::{ParserOptions, parse_with},
/// };
///
/// let tokens = tokenize("1 + 2 )").unwrap();
/// assert!(parse_with(&tokens, &ParserOptions::default()).is_ok());
/// assert!(parse_with(&tokens, &ParserOptions::strict()).is_err());
/// ```
pub fn parse_with(tokens: &[Spanned], options: &ParserOptions) -> ParseResult<Expr> {
    let mut cursor = Cursor::new(tokens, options.max_depth);
    let expr = parse_expression(&mut cursor)?;

    if let Some((token, span)) = cursor.peek() {
        if options.reject_trailing {
            return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                              position: span.start, });
        }
        debug!(position = span.start, token = %token, "ignoring trailing tokens");
    }

    Ok(expr)
}
