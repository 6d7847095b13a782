/// The evaluator module computes results from the syntax tree.
///
/// The evaluator walks the AST bottom-up, performs the arithmetic for each
/// operator, and reports runtime errors such as division by zero or integer
/// overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each paired with the character span it came from. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into integer, operator, and
///   parenthesis tokens.
/// - Skips whitespace.
/// - Reports lexical errors for invalid characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one routine per grammar
/// rule:
///
/// ```text
/// expression ::= term { ("+" | "-") term }
/// term       ::= factor { ("*" | "/") factor }
/// factor     ::= INTEGER | "(" expression ")"
/// ```
///
/// Nesting the rules gives `*` and `/` higher precedence than `+` and `-`;
/// both tiers are left-associative.
pub mod parser;
/// The value module defines the numeric results of evaluation.
pub mod value;
