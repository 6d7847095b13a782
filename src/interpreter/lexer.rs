use std::{iter::Peekable, ops::Range, str::CharIndices};

use logos::Logos;
use tracing::{debug, trace};

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Half-open range of character offsets a token covers in the source.
pub type Span = Range<usize>;

/// A token paired with the characters it was scanned from.
pub type Spanned = (Token, Span);

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace separates tokens but never produces one.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// The literal character of an operator or parenthesis token, `None` for
    /// integers.
    ///
    /// ## Example
    /// ```
    /// use rdcalc::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Slash.symbol(), Some('/'));
    /// assert_eq!(Token::Integer(3).symbol(), None);
    /// ```
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Integer(_) => None,
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self, self.symbol()) {
            (Self::Integer(n), _) => write!(f, "{n}"),
            (_, Some(c)) => write!(f, "{c}"),
            (_, None) => Ok(()),
        }
    }
}

/// Why logos rejected the current slice.
///
/// Logos only knows the slice it failed on; [`tokenize`] turns this into a
/// positioned [`LexError`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No token pattern matched.
    #[default]
    UnexpectedCharacter,
    /// A digit run did not fit in an `i64`.
    IntegerOverflow,
}

/// Parses an integer literal from the current token slice.
///
/// The slice only ever holds ASCII digits, so the sole failure is overflow.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::IntegerOverflow)
}

/// Converts increasing byte offsets into character offsets in one pass.
struct CharPositions<'s> {
    chars: Peekable<CharIndices<'s>>,
    count: usize,
}

impl<'s> CharPositions<'s> {
    fn new(source: &'s str) -> Self {
        Self { chars: source.char_indices().peekable(),
               count: 0, }
    }

    fn at(&mut self, byte: usize) -> usize {
        while self.chars.next_if(|&(i, _)| i < byte).is_some() {
            self.count += 1;
        }
        self.count
    }
}

/// Scans `source` into an ordered sequence of tokens.
///
/// Whitespace is skipped, every maximal run of ASCII digits becomes one
/// [`Token::Integer`], and each of `+ - * / ( )` becomes a single-character
/// token. Spans and error positions count characters, not bytes.
///
/// # Errors
/// - [`LexError::UnexpectedCharacter`] for anything outside that alphabet.
/// - [`LexError::IntegerOverflow`] for a literal larger than `i64::MAX`.
///
/// No tokens are returned when lexing fails.
///
/// # Example
/// ```
/// use rdcalc::{
///     error::LexError,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("12 * (3)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(12), 0..2),
///                 (Token::Star, 3..4),
///                 (Token::LParen, 5..6),
///                 (Token::Integer(3), 6..7),
///                 (Token::RParen, 7..8)]);
///
/// assert_eq!(tokenize("3 + a"),
///            Err(LexError::UnexpectedCharacter { character: 'a',
///                                                position:  4, }));
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut positions = CharPositions::new(source);
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let start = positions.at(span.start);

        match token {
            Ok(tok) => {
                let end = positions.at(span.end);
                trace!(token = %tok, start, end, "scanned token");
                tokens.push((tok, start..end));
            },
            Err(LexErrorKind::IntegerOverflow) => {
                return Err(LexError::IntegerOverflow { literal:  lexer.slice().to_string(),
                                                       position: start, });
            },
            Err(LexErrorKind::UnexpectedCharacter) => {
                let character = source.get(span.start..)
                                      .and_then(|rest| rest.chars().next())
                                      .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnexpectedCharacter { character,
                                                           position: start });
            },
        }
    }

    debug!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}
