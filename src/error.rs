/// Lexing errors.
///
/// Raised while scanning the source text into tokens: characters outside the
/// accepted alphabet and integer literals too large to represent.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token stream, such as missing operands, unbalanced parentheses, or
/// unexpected trailing tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include division by zero and results too large to represent.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the lex, parse, evaluate pipeline.
///
/// Each stage reports its own error type; this enum lets callers of
/// [`crate::calculate`] handle them uniformly while still matching on the
/// stage that failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The syntax tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Character offset in the source the error refers to.
    ///
    /// ## Example
    /// ```
    /// use rdcalc::calculate;
    ///
    /// let err = calculate("1 + x").unwrap_err();
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }

    /// Renders the source line the error refers to with a caret under
    /// [`Error::position`].
    ///
    /// ## Example
    /// ```
    /// use rdcalc::calculate;
    ///
    /// let err = calculate("3 + a").unwrap_err();
    /// assert_eq!(err.caret("3 + a"), "  3 + a\n      ^");
    /// ```
    #[must_use]
    pub fn caret(&self, source: &str) -> String {
        caret_line(source, self.position())
    }
}

/// Renders the line of `source` holding the character offset `position`,
/// indented by two spaces, with a caret under that offset.
///
/// Offsets count characters and newlines, the way every error counts them. An
/// offset equal to a line's length points just past its last character; an
/// offset beyond the whole source points past the end of the last line.
#[must_use]
pub fn caret_line(source: &str, position: usize) -> String {
    let mut offset = 0;
    let mut last = "";

    for line in source.split('\n') {
        let len = line.chars().count();
        if position <= offset + len {
            return format!("  {line}\n  {}^", " ".repeat(position - offset));
        }
        offset += len + 1;
        last = line;
    }

    format!("  {last}\n  {}^", " ".repeat(last.chars().count()))
}
