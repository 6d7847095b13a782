/// Parser entry points, options, and the top-level `expression` rule.
///
/// Drives a complete parse, decides what happens to trailing tokens, and
/// exposes the result type shared by all parsing routines.
pub mod core;

/// Token cursor with one token of lookahead.
///
/// Wraps the token slice, tracks the parenthesis nesting depth, and knows
/// where the input ends for error reporting.
pub mod cursor;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence tiers: additive (`+`, `-`)
/// and multiplicative (`*`, `/`).
pub mod binary;

/// Factor parsing.
///
/// Handles integer literals and parenthesized sub-expressions, the operands of
/// the multiplicative tier.
pub mod primary;
