/// Numeric conversion helpers.
///
/// This module provides the conversions used when an integer operand has to be
/// promoted to a real, including a division that keeps exact integer quotients
/// exact.
pub mod num;
