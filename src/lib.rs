//! # rdcalc
//!
//! rdcalc is an arithmetic expression calculator written in Rust.
//! It scans a string into tokens, parses the tokens into a syntax tree with a
//! recursive-descent parser, and evaluates the tree to a number.
//!
//! ```
//! use rdcalc::{calculate, interpreter::value::Value};
//!
//! assert_eq!(calculate("(2 + 3) * 4").unwrap(), Value::Integer(20));
//! assert_eq!(calculate("100 / 2 + 1").unwrap(), Value::Real(51.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Spanned, tokenize},
        parser::core::{ParserOptions, parse_with},
        value::Value,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an arithmetic expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the literal and binary operation node types.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while running an
/// expression through the pipeline. Every error carries the character
/// position it refers to, so callers can point at the problem in the source.
pub mod error;
/// Orchestrates the three stages of a calculation.
///
/// This module ties together lexing, parsing, evaluation, and the value
/// representation. Each stage can be driven on its own; [`calculate`] runs
/// them in sequence.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Evaluates an arithmetic expression.
///
/// Runs the lexer, the parser with default [`ParserOptions`], and the
/// evaluator in sequence. The first error from any stage aborts the whole
/// calculation.
///
/// # Errors
/// Returns [`Error::Lex`], [`Error::Parse`] or [`Error::Runtime`] depending on
/// which stage failed.
///
/// # Examples
/// ```
/// use rdcalc::{calculate, error::Error, interpreter::value::Value};
///
/// assert_eq!(calculate("2 + 3 * 4"), Ok(Value::Integer(14)));
/// assert_eq!(calculate("10 - 2 - 3"), Ok(Value::Integer(5)));
///
/// assert!(matches!(calculate("3 + a"), Err(Error::Lex(_))));
/// assert!(matches!(calculate("(1 + 2"), Err(Error::Parse(_))));
/// assert!(matches!(calculate("1 / 0"), Err(Error::Runtime(_))));
/// ```
pub fn calculate(source: &str) -> Result<Value, Error> {
    calculate_with(source, &ParserOptions::default())
}

/// Evaluates an arithmetic expression with explicit [`ParserOptions`].
///
/// # Errors
/// As [`calculate`], plus the errors the stricter options enable.
///
/// # Examples
/// ```
/// use rdcalc::{calculate_with, interpreter::parser::core::ParserOptions};
///
/// assert!(calculate_with("1 + 2 )", &ParserOptions::default()).is_ok());
/// assert!(calculate_with("1 + 2 )", &ParserOptions::strict()).is_err());
/// ```
pub fn calculate_with(source: &str, options: &ParserOptions) -> Result<Value, Error> {
    calculate_observed(source, options, &mut ())
}

/// Hooks into the intermediate results of [`calculate_observed`].
///
/// Both methods do nothing by default; `()` is the observer that ignores
/// everything.
pub trait Observer {
    /// Called once the source has been tokenized.
    fn on_tokens(&mut self, _tokens: &[Spanned]) {}

    /// Called once the tokens have been parsed, before evaluation.
    fn on_ast(&mut self, _ast: &Expr) {}
}

impl Observer for () {}

/// Evaluates an arithmetic expression, reporting the token stream and the
/// syntax tree to `observer` as they are produced.
///
/// A stage that fails reports nothing, and no later stage runs.
///
/// # Errors
/// As [`calculate_with`].
///
/// # Examples
/// ```
/// use rdcalc::{
///     Observer, ast::Expr, calculate_observed, interpreter::parser::core::ParserOptions,
/// };
///
/// #[derive(Default)]
/// struct Shape(String);
///
/// impl Observer for Shape {
///     fn on_ast(&mut self, ast: &Expr) {
///         self.0 = ast.to_string();
///     }
/// }
///
/// let mut shape = Shape::default();
/// calculate_observed("1 + 2 * 3", &ParserOptions::default(), &mut shape).unwrap();
/// assert_eq!(shape.0, "(1 + (2 * 3))");
/// ```
pub fn calculate_observed(source: &str,
                          options: &ParserOptions,
                          observer: &mut impl Observer)
                          -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    observer.on_tokens(&tokens);

    let ast = parse_with(&tokens, options)?;
    debug!(%ast, "parsed expression");
    observer.on_ast(&ast);

    let value = evaluate(&ast)?;
    debug!(%value, "evaluated expression");

    Ok(value)
}
