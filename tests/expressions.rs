use std::fs;

use stacalc::{error::EvalError, evaluate};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

fn assert_close(expression: &str, expected: f64) {
    match evaluate(expression, false) {
        Ok(value) => {
            assert!((value - expected).abs() <= TOLERANCE,
                    "'{expression}' evaluated to {value}, expected {expected}")
        },
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn assert_failure(expression: &str) {
    if let Ok(value) = evaluate(expression, false) {
        panic!("'{expression}' evaluated to {value} but was expected to fail")
    }
}

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| {
                                       e.path().extension().is_some_and(|ext| ext == "txt")
                                   })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((expression, expected)) = line.split_once("=>") else {
                panic!("Malformed case on line {} of {path:?}: {line}", number + 1);
            };
            let expected: f64 = expected.trim().parse().unwrap_or_else(|e| {
                                                           panic!("Bad expected value on line {} of {path:?}: {e}",
                                                                  number + 1)
                                                       });

            count += 1;
            match evaluate(expression, false) {
                Ok(value) => {
                    assert!((value - expected).abs() <= TOLERANCE,
                            "Case {line:?} in {path:?} evaluated to {value}")
                },
                Err(e) => panic!("Case {line:?} in {path:?} failed: {e}"),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[test]
fn basic_arithmetic() {
    assert_close("1.0 + 1.0", 2.0);
    assert_close("1.0 - 1.0", 0.0);
    assert_close("1.0 * 2.0", 2.0);
    assert_close("1.0 / 2.0", 0.5);
    assert_close("1.0 / 0.5", 2.0);
}

#[test]
fn operator_precedence() {
    assert_close("2 + 3 * 4", 14.0);
    assert_close("2 * 3 + 4", 10.0);
    assert_close("1 - 2 + 3", 2.0);
    assert_close("100 / 10 / 5", 2.0);
    assert_close("2 * 3 ^ 2", 18.0);
}

#[test]
fn brackets_group_sub_expressions() {
    assert_close("2 * (3 + 4)", 14.0);
    assert_close("(1 + 2) * (3 + 4)", 21.0);
    assert_close("((2))", 2.0);
    assert_close("10 / (2 + 3)", 2.0);
}

#[test]
fn trigonometric_functions() {
    assert_close("sin(90.0)", 90f64.sin());
    assert_close("cos(90.0)", 90f64.cos());
    assert_close("tan(45.0)", 45f64.tan());
}

#[test]
fn trig_accepts_bare_literal_argument() {
    assert_close("sin90", 90f64.sin());
    assert_close("cos45.0", 45f64.cos());
    assert_close("sin45.0 ^ (2.0) + cos(45.0) ^ 2.0", 1.0);
}

#[test]
fn trig_argument_is_evaluated_recursively() {
    assert_close("cos(60 + 23)", 83f64.cos());
    assert_close("sin(2 * (10 + 35))", 90f64.sin());
}

#[test]
fn exponentiation() {
    assert_close("2.0 ^ 3.0", 8.0);
    assert_close("4 ^ 0.5", 2.0);
    assert_close("2 ^ (1 + 1)", 4.0);
    assert_close("2.0 ^ ((8.0 * 2.0) / 4.0)", 16.0);
}

#[test]
fn trig_identity_is_consistent_across_nesting() {
    assert_close("cos(45) ^ 2 + sin(45) ^ 2", 1.0);
}

#[test]
fn literal_round_trip() {
    assert_close("42", 42.0);
    assert_close("12.5", 12.5);
    assert_close(".5", 0.5);
    assert_close("0.1234567890", 0.123_456_789);
}

#[test]
fn whitespace_never_separates_tokens() {
    assert_close("1 2", 12.0);
    assert_close(" \t 3 + 4 ", 7.0);
}

#[test]
fn debug_tracing_does_not_change_results() {
    let plain = evaluate("sin(45) ^ (2 * 1)", false).unwrap();
    let traced = evaluate("sin(45) ^ (2 * 1)", true).unwrap();
    assert!((plain - traced).abs() <= TOLERANCE);
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(evaluate("1.0 / 0", false),
                     Err(EvalError::DivisionByZero { .. })));
    assert_close("0 / 2", 0.0);
}

#[test]
fn unmatched_brackets_are_errors() {
    assert_failure("(1.0 +");
    assert_failure("1 + 2)");
    assert_failure("sin(1");
    assert!(matches!(evaluate("(1 + 2", false),
                     Err(EvalError::UnmatchedBracket { .. })));
}

#[test]
fn missing_operands_are_errors() {
    assert_failure("1 +");
    assert_failure("* 2");
    assert_failure("2 ^");
    assert_failure("^ 2");
    assert_failure("sin +");
}

#[test]
fn empty_expressions_are_errors() {
    assert!(matches!(evaluate("", false), Err(EvalError::EmptyExpression { .. })));
    assert!(matches!(evaluate("   ", false), Err(EvalError::EmptyExpression { .. })));
    assert!(matches!(evaluate("sin()", false), Err(EvalError::EmptyExpression { .. })));
    assert!(matches!(evaluate("2 ^ ()", false), Err(EvalError::EmptyExpression { .. })));
    assert_failure("()");
}

#[test]
fn unknown_function_is_error() {
    assert!(matches!(evaluate("sqrt(4)", false),
                     Err(EvalError::UnknownFunction { .. })));
    assert!(matches!(evaluate("cot(4)", false),
                     Err(EvalError::UnknownFunction { .. })));
}

#[test]
fn unrecognized_character_is_error() {
    assert!(matches!(evaluate("1 @ 2", false),
                     Err(EvalError::UnrecognizedCharacter { symbol: '@', .. })));
    assert!(matches!(evaluate("x + 1", false),
                     Err(EvalError::UnrecognizedCharacter { symbol: 'x', .. })));
}

#[test]
fn malformed_literals_are_errors() {
    assert!(matches!(evaluate("1.5.2", false),
                     Err(EvalError::MalformedLiteral { .. })));
    assert!(matches!(evaluate(".", false), Err(EvalError::MalformedLiteral { .. })));
    assert!(matches!(evaluate("1 + .", false),
                     Err(EvalError::MalformedLiteral { .. })));
}

#[test]
fn fractional_digit_cap_rejects_overlong_literals() {
    // The scanner stops after ten fractional digits; the leftover digits
    // form a second operand and the expression is rejected.
    assert!(matches!(evaluate("1.123456789012 + 1", false),
                     Err(EvalError::TrailingOperand { .. })));
}
