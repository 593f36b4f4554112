/// The core module drives expression evaluation.
///
/// It owns the main dispatch loop that walks the input with a character
/// cursor, the precedence-driven reduction of pending operators against
/// pending operands, and the recursive evaluation of bracketed and
/// function-argument sub-expressions.
///
/// # Responsibilities
/// - Classifies each cursor position and dispatches to the scanner, the
///   trigonometric and power handlers, or the generic operator logic.
/// - Reduces the two most recent operands with the most recent operator when
///   precedence rules demand it.
/// - Drains the operator stack at end of input and checks that exactly one
///   result remains.
pub mod core;
/// The operator module defines the recognized operator symbols.
///
/// Each operator variant is tied to exactly one character used both to
/// recognize it in the input and to display it. The mapping is a bijection
/// over the recognized symbol set; any other character is not an operator.
///
/// # Responsibilities
/// - Defines the closed `Operator` enumeration.
/// - Converts between characters and operator variants in both directions.
pub mod operator;
/// The scanner module reads numeric literals.
///
/// A single scanner is used everywhere a literal can occur: as an operand,
/// as a bare trigonometric argument, and as a bare exponent. It consumes the
/// maximal run of digits with at most one decimal point, accumulating the
/// value digit by digit.
///
/// # Responsibilities
/// - Parses integer and fractional digit runs into an `f64`.
/// - Enforces the fractional-digit bound and rejects a second decimal point.
/// - Reports the cursor position immediately past the consumed run.
pub mod scanner;
