use std::thread;

use rdcalc::{
    Observer,
    ast::Expr,
    calculate, calculate_observed, calculate_with,
    error::{Error, LexError, ParseError, RuntimeError, caret_line},
    interpreter::{lexer::Spanned, parser::core::ParserOptions, value::Value},
};

fn assert_integer(src: &str, expected: i64) {
    match calculate(src) {
        Ok(value) => assert_eq!(value, Value::Integer(expected), "input: {src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_real(src: &str, expected: f64) {
    match calculate(src) {
        Ok(Value::Real(r)) => assert!((r - expected).abs() < 1e-12, "input: {src}, got {r}"),
        Ok(other) => panic!("Expression {src:?} produced {other:?}, expected a real"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match calculate(src) {
        Ok(v) => panic!("Expression {src:?} succeeded with {v} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_integer("1 + 2", 3);
    assert_integer("7 * 9", 63);
    assert_integer("8 - 5", 3);
    assert_integer("42", 42);
    assert_real("10 / 4", 2.5);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_integer("2 + 3 * 4", 14);
    assert_integer("2 * 3 + 4", 10);
    assert_integer("20 - 6 * 3", 2);
    assert_real("1 + 6 / 4", 2.5);
}

#[test]
fn same_tier_operators_fold_left() {
    assert_integer("10 - 2 - 3", 5);
    assert_real("100 / 10 / 5", 2.0);
    assert_real("8 / 4 * 2", 4.0);
    assert_integer("1 - 2 + 3", 2);
}

#[test]
fn parentheses_override_precedence() {
    assert_integer("(2 + 3) * 4", 20);
    assert_integer("10 - (2 - 3)", 11);
    assert_integer("((((7))))", 7);
    assert_integer("2 * (3 + (4 - 1)) * 2", 24);
}

#[test]
fn division_is_true_division() {
    assert_real("100 / 2 + 1", 51.0);
    assert_real("1 / 3", 1.0 / 3.0);
    assert_real("7 / 2 * 2", 7.0);
    assert_eq!(calculate("100 / 2 + 1").unwrap().to_string(), "51");
}

#[test]
fn subtraction_produces_negative_results() {
    assert_integer("3 - 10", -7);
    assert_integer("0 - 5 * 5", -25);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(calculate("1+2"), calculate(" 1 + 2 "));
    assert_integer("\t(1\n+\r\n2)\u{a0}*3", 9);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("1 / 0"),
               Error::Runtime(RuntimeError::DivisionByZero { position: 2 }));
    assert!(matches!(assert_failure("5 / (3 - 3)"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("0 / 0"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn integer_overflow_is_error() {
    assert!(matches!(assert_failure("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow { position: 20 })));
    assert!(matches!(assert_failure("0 - 9223372036854775807 - 2"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(assert_failure("4294967296 * 4294967296"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn huge_integers_divide_to_the_nearest_real() {
    assert_eq!(calculate("9007199254740993 / 3"),
               Ok(Value::Real(3_002_399_751_580_331.0)));
    assert_eq!(calculate("9007199254740991 / 1"),
               Ok(Value::Real(9_007_199_254_740_991.0)));
    assert_eq!(calculate("9007199254740993 / 1"),
               Ok(Value::Real(9_007_199_254_740_992.0)));
    assert_eq!(calculate("9223372036854775807 / 2 * 2"),
               Ok(Value::Real(9_223_372_036_854_775_807.0)));
}

#[test]
fn invalid_character_is_error() {
    assert_eq!(assert_failure("3 + a"),
               Error::Lex(LexError::UnexpectedCharacter { character: 'a',
                                                          position:  4, }));
    assert!(matches!(assert_failure("1.5"), Error::Lex(_)));
    assert!(matches!(assert_failure("2 ^ 3"), Error::Lex(_)));
}

#[test]
fn lex_errors_win_over_parse_errors() {
    assert!(matches!(assert_failure("(1 + $"), Error::Lex(_)));
}

#[test]
fn malformed_expressions_are_errors() {
    assert_eq!(assert_failure("(1 + 2"),
               Error::Parse(ParseError::ExpectedClosingParen { position: 6 }));
    assert_eq!(assert_failure(""),
               Error::Parse(ParseError::UnexpectedEndOfInput { position: 0 }));
    assert_eq!(assert_failure("1 +"),
               Error::Parse(ParseError::UnexpectedEndOfInput { position: 3 }));
    assert_eq!(assert_failure("* 2"),
               Error::Parse(ParseError::UnexpectedToken { token:    "*".to_string(),
                                                          position: 0, }));
    assert!(matches!(assert_failure("-1"), Error::Parse(_)));
    assert!(matches!(assert_failure("()"), Error::Parse(_)));
}

#[test]
fn trailing_tokens_are_ignored_by_default() {
    assert_integer("1 + 2)", 3);
    assert_integer("1 2 3", 1);
    assert_integer("4 * 2 ( 9", 8);
}

#[test]
fn trailing_tokens_are_rejected_in_strict_mode() {
    let strict = ParserOptions::strict();

    assert_eq!(calculate_with("1 + 2", &strict), Ok(Value::Integer(3)));
    assert_eq!(calculate_with("1 + 2)", &strict),
               Err(Error::Parse(ParseError::UnexpectedTrailingTokens { token:    ")".to_string(),
                                                                       position: 5, })));
}

#[test]
fn every_error_reports_a_position() {
    for (src, position) in [("3 + a", 4), ("(1 + 2", 6), ("12 / (4 - 4)", 3)] {
        assert_eq!(assert_failure(src).position(), position, "input: {src}");
    }
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(assert_failure("3 + a").to_string(),
               "Error at position 4: Unexpected character 'a'.");
    assert_eq!(assert_failure("(1 + 2").to_string(),
               "Error at position 6: Expected closing parenthesis ')' but none found.");
    assert_eq!(assert_failure("1 / 0").to_string(),
               "Error at position 2: Division by zero.");
}

/// Runs `f` on a thread with a deliberately small stack.
fn on_small_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    thread::Builder::new().stack_size(256 * 1024)
                          .spawn(f)
                          .unwrap()
                          .join()
                          .unwrap()
}

#[test]
fn million_term_chain_evaluates_on_a_small_stack() {
    let sum = on_small_stack(|| calculate(&vec!["1"; 1_000_000].join(" + ")));
    assert_eq!(sum, Ok(Value::Integer(1_000_000)));

    let mixed = on_small_stack(|| calculate(&vec!["2"; 100_000].join(" / 2 * ")));
    assert_eq!(mixed, Ok(Value::Real(2.0)));
}

#[test]
fn caret_points_at_the_offending_character() {
    assert_eq!(assert_failure("3 + a").caret("3 + a"), "  3 + a\n      ^");
    assert_eq!(assert_failure("(1 + 2").caret("(1 + 2"), "  (1 + 2\n        ^");

    let src = "1 +\n(2 * x)";
    let err = assert_failure(src);
    assert_eq!(err.position(), 9);
    assert_eq!(err.caret(src), "  (2 * x)\n       ^");
}

#[test]
fn caret_past_the_end_sits_after_the_last_line() {
    assert_eq!(caret_line("1 + 2", 40), "  1 + 2\n       ^");
    assert_eq!(caret_line("1\n22", 9), "  22\n    ^");
    assert_eq!(caret_line("", 0), "  \n  ^");
}

#[derive(Default)]
struct Recorder {
    tokens: Vec<String>,
    ast:    Option<String>,
}

impl Observer for Recorder {
    fn on_tokens(&mut self, tokens: &[Spanned]) {
        self.tokens = tokens.iter().map(|(token, _)| token.to_string()).collect();
    }

    fn on_ast(&mut self, ast: &Expr) {
        self.ast = Some(ast.to_string());
    }
}

#[test]
fn observer_sees_each_stage() {
    let mut recorder = Recorder::default();
    let value = calculate_observed("2 * (3 + 4)", &ParserOptions::default(), &mut recorder);

    assert_eq!(value, Ok(Value::Integer(14)));
    assert_eq!(recorder.tokens, ["2", "*", "(", "3", "+", "4", ")"]);
    assert_eq!(recorder.ast.as_deref(), Some("(2 * (3 + 4))"));
}

#[test]
fn observer_hears_nothing_after_a_failed_stage() {
    let mut recorder = Recorder::default();
    assert!(calculate_observed("(1 +", &ParserOptions::default(), &mut recorder).is_err());
    assert_eq!(recorder.tokens.len(), 3);
    assert_eq!(recorder.ast, None);

    let mut recorder = Recorder::default();
    assert!(calculate_observed("1 $", &ParserOptions::default(), &mut recorder).is_err());
    assert!(recorder.tokens.is_empty());
}

#[test]
fn arbitrary_inputs_never_panic() {
    let alphabet = ['1', '0', '9', '+', '-', '*', '/', '(', ')', ' '];
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;

    for _ in 0..2_000 {
        let mut src = String::new();
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let len = usize::try_from(state % 24).unwrap();
        for _ in 0..len {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            src.push(alphabet[usize::try_from(state % 10).unwrap()]);
        }
        let _ = calculate(&src);
    }
}
