#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every variant carries `pos`, the zero-based character offset in the
/// whitespace-stripped expression at which the failure was detected. For a
/// failure inside a bracketed or function-argument sub-expression the offset
/// is relative to that substring, since sub-expressions are evaluated as
/// independent expressions.
pub enum EvalError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The offset where the error occurred.
        pos: usize,
    },
    /// An opening bracket has no matching closing bracket, or vice versa.
    UnmatchedBracket {
        /// The offset where the error occurred.
        pos: usize,
    },
    /// An operator is missing one of its operands.
    MissingOperand {
        /// The offset where the error occurred.
        pos: usize,
    },
    /// A value was left over after all operators were applied.
    TrailingOperand {
        /// The offset where the error occurred.
        pos: usize,
    },
    /// Called a function other than `sin`, `cos` or `tan`.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The offset where the error occurred.
        pos:  usize,
    },
    /// A numeric literal contains more than one decimal point.
    MalformedLiteral {
        /// The offset where the error occurred.
        pos: usize,
    },
    /// A character that is neither a digit, a decimal point, nor a
    /// recognized operator or function symbol.
    UnrecognizedCharacter {
        /// The character encountered.
        symbol: char,
        /// The offset where the error occurred.
        pos:    usize,
    },
    /// The expression, or a bracketed sub-expression, is empty.
    EmptyExpression {
        /// The offset where the error occurred.
        pos: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { pos } => {
                write!(f, "Error at offset {pos}: Division by zero.")
            },

            Self::UnmatchedBracket { pos } => {
                write!(f, "Error at offset {pos}: Unmatched bracket.")
            },

            Self::MissingOperand { pos } => {
                write!(f, "Error at offset {pos}: Operator is missing an operand.")
            },

            Self::TrailingOperand { pos } => write!(f,
                                                    "Error at offset {pos}: Value left over after all operators were applied."),

            Self::UnknownFunction { name, pos } => {
                write!(f, "Error at offset {pos}: Unknown function '{name}'.")
            },

            Self::MalformedLiteral { pos } => write!(f,
                                                     "Error at offset {pos}: Literal contains more than one decimal point."),

            Self::UnrecognizedCharacter { symbol, pos } => {
                write!(f, "Error at offset {pos}: Unrecognized character '{symbol}'.")
            },

            Self::EmptyExpression { pos } => {
                write!(f, "Error at offset {pos}: Expression is empty.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
