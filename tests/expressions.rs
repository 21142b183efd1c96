use calq::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    evaluate,
    interpreter::{evaluator::eval, lexer::Lexer},
    parse,
};
use pretty_assertions::assert_eq;

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if evaluate(src).is_ok() {
        panic!("Expression {src:?} succeeded but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3);
    assert_value("7 * 9", 63);
    assert_value("8 - 5", 3);
    assert_value("10 / 2", 5);
    assert_value("42", 42);
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14);
    assert_value("2 * 3 + 4", 10);
    assert_value("(2 + 3) * 4", 20);
    assert_value("10 - 4 / 2", 8);
    assert_value("7 + 3 * (10 / (12 / (3 + 1) - 1))", 22);
}

#[test]
fn left_associativity() {
    assert_value("8 - 3 - 2", 3);
    assert_value("100 / 10 / 2", 5);
    assert_value("1 - 2 + 3", 2);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("1 / 3", 0);
    assert_value("9 / 3", 3);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("  12 +  7 ", 19);
    assert_value("\t3*4\t", 12);
    assert_value("( 1 + 2 ) * 3", 9);
}

#[test]
fn nested_parentheses() {
    assert_value("((((5))))", 5);
    assert_value("(2 + (3 * (4 - 1)))", 11);
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    // The expression itself is syntactically fine.
    let expr = parse("5 / 0").expect("should parse");
    assert!(eval(&expr).is_err());

    assert_failure("5 / 0");
    assert_failure("1 + 10 / (3 - 3)");
}

#[test]
fn overflow_is_a_runtime_error() {
    assert_failure("9223372036854775807 + 1");
    assert_failure("0 - 9223372036854775807 - 2");
    assert_failure("3037000500 * 3037000500");
    assert_value("9223372036854775807 - 1", 9_223_372_036_854_775_806);
}

#[test]
fn unbalanced_parentheses_are_syntax_errors() {
    assert!(matches!(parse("(1+2"),
                     Err(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(parse("1+2)"), Err(ParseError::TrailingTokens { .. })));
    assert!(matches!(parse("()"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn invalid_characters_are_lex_errors() {
    match parse("3+@2") {
        Err(ParseError::InvalidCharacter { character, offset }) => {
            assert_eq!(character, '@');
            assert_eq!(offset, 2);
        },
        other => panic!("Expected an invalid-character error, got {other:?}"),
    }

    assert!(matches!(parse("1 + x"),
                     Err(ParseError::InvalidCharacter { character: 'x', .. })));
}

#[test]
fn incomplete_expressions_are_syntax_errors() {
    assert!(matches!(parse(""), Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(parse("1 +"),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(parse("1 2"), Err(ParseError::TrailingTokens { .. })));
    assert!(matches!(parse("* 3"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn oversized_literal_is_a_number_error() {
    // All digits, but past i64::MAX.
    assert!(matches!(parse("9223372036854775808"),
                     Err(ParseError::InvalidNumber { .. })));
}

#[test]
fn lexer_end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("1+2");

    while let Some(_) = lexer.next_token().expect("valid input") {}

    for _ in 0..3 {
        assert!(lexer.next_token().expect("no error after exhaustion").is_none());
    }
}

#[test]
fn parse_builds_a_left_leaning_tree() {
    let expr = parse("8-3-2").expect("should parse");

    // (8 - 3) - 2, never 8 - (3 - 2).
    match expr {
        Expr::BinaryOp { left,
                         op: BinaryOperator::Sub,
                         right,
                         .. } => {
            assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
            assert!(matches!(*right, Expr::Literal { value: 2, .. }));
        },
        other => panic!("Unexpected tree shape: {other:?}"),
    }
}

#[test]
fn display_round_trips_through_the_parser() {
    for src in ["8-3-2", "2+3*4", "(2+3)*4", "7/2", "1*(2+3)-4/2", "  12 +  7 "] {
        let expr = parse(src).expect("should parse");
        let rendered = expr.to_string();
        let reparsed = parse(&rendered).expect("rendered form should parse");

        assert_eq!(eval(&reparsed).unwrap(),
                   eval(&expr).unwrap(),
                   "round-trip changed the value of {src:?} (rendered as {rendered:?})");
    }
}

#[test]
fn fully_parenthesized_rendering() {
    let expr = parse("2+3*4").expect("should parse");
    assert_eq!(expr.to_string(), "(2 + (3 * 4))");

    let expr = parse("(1+2)*3").expect("should parse");
    assert_eq!(expr.to_string(), "((1 + 2) * 3)");
    assert_eq!(expr.to_lisp(), "(* (+ 1 2) 3)");
}
