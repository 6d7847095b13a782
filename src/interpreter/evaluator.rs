/// Core evaluation logic.
///
/// Contains the tree walk over [`crate::ast::Expr`] and the result type
/// shared by all evaluation routines.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators over integers and reals,
/// including overflow and division-by-zero checks.
pub mod binary;
