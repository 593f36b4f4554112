//! # stacalc
//!
//! stacalc is a two-stack arithmetic expression calculator written in Rust.
//! It evaluates expressions containing decimal literals, the binary operators
//! `+ - * /`, exponentiation with `^`, parentheses, and the trigonometric
//! functions `sin`, `cos` and `tan`, producing a double-precision result.

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

use crate::error::EvalError;

/// Provides the unified error type for evaluation.
///
/// This module defines all errors that can be raised while scanning or
/// evaluating an expression. It standardizes error reporting and carries the
/// character offset at which each failure was detected, so malformed input
/// surfaces as a structured error rather than a low-level container failure.
///
/// # Responsibilities
/// - Defines the `EvalError` enum covering every failure mode (division by
///   zero, bracket mismatches, missing operands, bad literals).
/// - Attaches character offsets and detailed messages for user feedback.
/// - Integrates with the standard error handling traits.
pub mod error;
/// The evaluator module scans and computes arithmetic expressions.
///
/// The evaluator walks the input left to right with a character cursor,
/// scanning numeric literals on the fly and resolving operator precedence
/// with a pair of stacks: one of pending operators, one of pending operands.
/// Parenthesized sub-expressions and trigonometric function arguments are
/// resolved by recursively evaluating the enclosed substring as an
/// independent expression; no syntax tree is ever built.
///
/// # Responsibilities
/// - Classifies each input position (digit, function keyword, operator,
///   bracket) and dispatches accordingly.
/// - Reduces pending operator/operand pairs when precedence demands it.
/// - Reports evaluation errors such as division by zero or unmatched
///   brackets.
pub mod evaluator;
/// Generic linked-list containers with stack and queue semantics.
///
/// This module provides the ordered containers the evaluator stores its
/// pending operators and operands in: a last-in-first-out `Stack` and a
/// first-in-first-out `Queue`, both built on a singly-linked chain of nodes
/// and sharing the `Staque` trait (`add`, `get`, `extract`, emptiness and
/// length checks, iteration). A small batch facility replays a recorded
/// sequence of actions against any such container.
///
/// # Responsibilities
/// - Defines the `Staque` contract and the shared node and iterator types.
/// - Implements `Stack` (LIFO) and `Queue` (FIFO) over the node chain.
/// - Replays `StaqueAction` batches with optional tracing.
pub mod staque;

/// Evaluates an arithmetic expression and returns the result.
///
/// All whitespace is stripped before scanning, so spaces never separate
/// tokens: `"1 2"` is the literal `12`. An input that is empty after
/// stripping is rejected. Each call is a pure function of its input; no
/// state survives between calls, and unrelated expressions may be evaluated
/// concurrently from different threads.
///
/// When `debug` is set, every recursive sub-expression evaluation is traced
/// through the `log` facade at debug level. Tracing is diagnostic only and
/// does not affect the result.
///
/// # Parameters
/// - `expression`: Text of the expression to evaluate.
/// - `debug`: Whether to trace sub-expression evaluations.
///
/// # Returns
/// The computed value, or an [`EvalError`] describing why the expression
/// could not be evaluated.
///
/// # Errors
/// Returns an error for malformed input (unmatched brackets, missing
/// operands, unknown function names, unrecognized characters, bad literals)
/// and for division by zero.
///
/// # Examples
/// ```
/// use stacalc::evaluate;
///
/// let result = evaluate("2 ^ ((8 * 2) / 4)", false).unwrap();
/// assert_eq!(result, 16.0);
///
/// // Division by zero is an error, not a silent infinity.
/// assert!(evaluate("1 / 0", false).is_err());
/// ```
pub fn evaluate(expression: &str, debug: bool) -> Result<f64, EvalError> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    if stripped.is_empty() {
        return Err(EvalError::EmptyExpression { pos: 0 });
    }

    evaluator::core::eval_expression(&stripped, debug)
}
