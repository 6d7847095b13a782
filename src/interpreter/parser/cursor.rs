use std::{iter::Peekable, slice::Iter};

use crate::{
    error::ParseError,
    interpreter::{lexer::Spanned, parser::core::ParseResult},
};

/// A read position over a token sequence.
///
/// The cursor only ever moves forward. It offers a single token of lookahead
/// through [`Cursor::peek`], which is all the grammar needs.
pub struct Cursor<'a> {
    tokens:    Peekable<Iter<'a, Spanned>>,
    end:       usize,
    depth:     usize,
    max_depth: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first token.
    ///
    /// `max_depth` bounds how many parenthesized groups may be open at once.
    #[must_use]
    pub fn new(tokens: &'a [Spanned], max_depth: usize) -> Self {
        let end = tokens.last().map_or(0, |(_, span)| span.end);
        Self { tokens: tokens.iter().peekable(),
               end,
               depth: 0,
               max_depth }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<&'a Spanned> {
        self.tokens.peek().copied()
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<&'a Spanned> {
        self.tokens.next()
    }

    /// Character offset one past the last token; where end-of-input errors
    /// point.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of parenthesized groups currently open.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Records that a `(` at `position` was consumed.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] if the group would exceed the
    /// configured maximum depth.
    pub fn enter_group(&mut self, position: usize) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    position });
        }
        self.depth += 1;
        Ok(())
    }

    /// Records that the innermost group was closed.
    pub const fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
