use log::debug;

use crate::{
    error::EvalError,
    evaluator::{operator::Operator, scanner::scan_literal},
    staque::{core::Staque, stack::Stack},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a whitespace-stripped expression with the two-stack algorithm.
///
/// The loop classifies each cursor position as a literal start, a
/// trigonometric keyword, the power operator, or a generic operator or
/// bracket, and dispatches accordingly. Operands accumulate on one stack and
/// deferred operators on another; precedence is resolved by reducing the top
/// of both stacks whenever an incoming operator cannot be deferred any
/// longer. After the cursor exhausts the input the operator stack is drained
/// and the single remaining operand is the result.
///
/// Bracketed sub-expressions and function arguments are evaluated by calling
/// this function recursively on the substring between the matching brackets;
/// every recursive call constructs its own fresh pair of stacks.
///
/// # Parameters
/// - `expression`: Expression text with all whitespace already removed.
/// - `debug`: Whether to trace sub-expression evaluations.
///
/// # Returns
/// The computed value of the expression.
///
/// # Errors
/// Any [`EvalError`] raised while scanning or reducing; failures inside a
/// recursive call abort the whole evaluation.
pub fn eval_expression(expression: &str, debug: bool) -> EvalResult<f64> {
    let mut values: Stack<f64> = Stack::new();
    let mut operators: Stack<Operator> = Stack::new();

    let bytes = expression.as_bytes();
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'0'..=b'9' | b'.' => {
                let (value, next) = scan_literal(expression, index)?;
                values.add(value);
                index = next;
            },

            b's' | b'c' | b't' => {
                index = eval_function(expression, index, &mut values, debug)?;
            },

            b'^' => {
                index = eval_power(expression, index, &mut values, debug)?;
            },

            b'+' | b'-' | b'*' | b'/' | b'(' | b')' => {
                // The byte is one of the recognized ASCII symbols, so the
                // conversion cannot fail.
                let Some(operator) = Operator::from_symbol(char::from(bytes[index])) else {
                    unreachable!()
                };
                handle_operator(operator, index, &mut values, &mut operators)?;
                index += 1;
            },

            _ => {
                let symbol = expression[index..].chars().next().unwrap_or('\u{fffd}');
                return Err(EvalError::UnrecognizedCharacter { symbol, pos: index });
            },
        }
    }

    // Apply whatever is still pending once the input is exhausted.
    while !operators.is_empty() {
        reduce(&mut values, &mut operators, expression.len())?;
    }

    let result = values.extract()
                       .ok_or(EvalError::MissingOperand { pos: expression.len() })?;
    if !values.is_empty() {
        return Err(EvalError::TrailingOperand { pos: expression.len() });
    }
    Ok(result)
}

/// Applies the most recent pending operator to the two most recent operands.
///
/// Pops the operator, then the right operand `b`, then the left operand `a`,
/// and pushes `a op b` back onto the operand stack. This is the unit step of
/// expression evaluation.
///
/// # Parameters
/// - `values`: The operand stack; must hold at least two values.
/// - `operators`: The operator stack; must hold at least one operator.
/// - `pos`: Cursor offset for error reporting.
///
/// # Errors
/// - `DivisionByZero` if the operator is `/` and the divisor is zero.
/// - `UnmatchedBracket` if the pending operator is an opening bracket, which
///   means its closing bracket never arrived.
/// - `MissingOperand` if either stack underflows.
fn reduce(values: &mut Stack<f64>, operators: &mut Stack<Operator>, pos: usize) -> EvalResult<()> {
    let operator = operators.extract()
                            .ok_or(EvalError::MissingOperand { pos })?;
    if operator == Operator::Open {
        return Err(EvalError::UnmatchedBracket { pos });
    }

    let b = values.extract().ok_or(EvalError::MissingOperand { pos })?;
    let a = values.extract().ok_or(EvalError::MissingOperand { pos })?;

    let result = match operator {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero { pos });
            }
            a / b
        },
        // Only the four deferrable operators and `(` are ever pushed onto
        // the operator stack.
        _ => unreachable!(),
    };

    values.add(result);
    Ok(())
}

/// Resolves precedence for an incoming generic operator or bracket.
///
/// - `+` and `-` first reduce every pending operator down to the nearest
///   opening bracket, then push themselves.
/// - `*` and `/` reduce only pending operators of their own precedence
///   level, deferring behind `+`, `-` and `(`.
/// - `(` is always pushed; `)` reduces until the matching `(` is found and
///   then discards it.
///
/// # Parameters
/// - `operator`: The incoming operator.
/// - `pos`: Cursor offset for error reporting.
/// - `values`: The operand stack.
/// - `operators`: The operator stack.
///
/// # Errors
/// - `UnmatchedBracket` if `)` drains the stack without finding `(`.
/// - Propagates any error from [`reduce`].
fn handle_operator(operator: Operator,
                   pos: usize,
                   values: &mut Stack<f64>,
                   operators: &mut Stack<Operator>)
                   -> EvalResult<()> {
    match operator {
        Operator::Add | Operator::Sub => {
            while let Some(top) = operators.get()
                  && *top != Operator::Open
            {
                reduce(values, operators, pos)?;
            }
            operators.add(operator);
        },

        Operator::Mul | Operator::Div => {
            while let Some(top) = operators.get()
                  && matches!(*top, Operator::Mul | Operator::Div)
            {
                reduce(values, operators, pos)?;
            }
            operators.add(operator);
        },

        Operator::Open => operators.add(operator),

        Operator::Close => loop {
            match operators.get() {
                Some(Operator::Open) => {
                    operators.extract();
                    break;
                },
                Some(_) => reduce(values, operators, pos)?,
                None => return Err(EvalError::UnmatchedBracket { pos }),
            }
        },

        _ => unreachable!(),
    }

    Ok(())
}

/// Evaluates a trigonometric function at the current cursor position.
///
/// The three-character keyword is verified in full, then the argument is
/// either the bracketed sub-expression that follows (evaluated recursively)
/// or a bare numeric literal. The function value is pushed onto the operand
/// stack. Arguments are in radians.
///
/// # Parameters
/// - `expression`: The whitespace-stripped expression text.
/// - `index`: Cursor position of the keyword's first letter.
/// - `values`: The operand stack.
/// - `debug`: Whether to trace the sub-expression evaluation.
///
/// # Returns
/// The cursor position immediately past the consumed argument.
///
/// # Errors
/// - `UnknownFunction` if the alphabetic run at the cursor is not `sin`,
///   `cos` or `tan`.
/// - `MissingOperand` if no argument follows the keyword.
/// - Propagates any error from the recursive evaluation or the scanner.
fn eval_function(expression: &str,
                 index: usize,
                 values: &mut Stack<f64>,
                 debug: bool)
                 -> EvalResult<usize> {
    let bytes = expression.as_bytes();

    // The dispatch loop guarantees the first byte is `s`, `c` or `t`.
    let Some(operator) = Operator::from_symbol(char::from(bytes[index])) else {
        unreachable!()
    };
    let keyword = match operator {
        Operator::Sin => "sin",
        Operator::Cos => "cos",
        Operator::Tan => "tan",
        _ => unreachable!(),
    };

    if !expression[index..].starts_with(keyword) {
        let name: String = expression[index..].chars()
                                              .take_while(char::is_ascii_alphabetic)
                                              .collect();
        return Err(EvalError::UnknownFunction { name, pos: index });
    }

    let cursor = index + keyword.len();
    let (argument, next) = match bytes.get(cursor) {
        Some(b'(') => {
            let close = find_closing(expression, cursor)?;
            let value = eval_sub(&expression[cursor + 1..close], cursor, debug)?;
            (value, close + 1)
        },
        Some(byte) if byte.is_ascii_digit() || *byte == b'.' => scan_literal(expression, cursor)?,
        _ => return Err(EvalError::MissingOperand { pos: cursor }),
    };

    values.add(match operator {
                   Operator::Sin => argument.sin(),
                   Operator::Cos => argument.cos(),
                   Operator::Tan => argument.tan(),
                   _ => unreachable!(),
               });

    Ok(next)
}

/// Evaluates the power operator at the current cursor position.
///
/// Exponentiation is applied immediately rather than deferred: the most
/// recently pushed operand is popped as the base, the exponent is either the
/// bracketed sub-expression that follows (evaluated recursively) or a bare
/// numeric literal, and `base ^ exponent` is pushed back.
///
/// # Parameters
/// - `expression`: The whitespace-stripped expression text.
/// - `index`: Cursor position of the `^` symbol.
/// - `values`: The operand stack.
/// - `debug`: Whether to trace the sub-expression evaluation.
///
/// # Returns
/// The cursor position immediately past the consumed exponent.
///
/// # Errors
/// - `MissingOperand` if there is no pending operand to use as the base, or
///   no exponent follows the symbol.
/// - Propagates any error from the recursive evaluation or the scanner.
fn eval_power(expression: &str,
              index: usize,
              values: &mut Stack<f64>,
              debug: bool)
              -> EvalResult<usize> {
    let bytes = expression.as_bytes();

    let base = values.extract().ok_or(EvalError::MissingOperand { pos: index })?;

    let cursor = index + 1;
    let (exponent, next) = match bytes.get(cursor) {
        Some(b'(') => {
            let close = find_closing(expression, cursor)?;
            let value = eval_sub(&expression[cursor + 1..close], cursor, debug)?;
            (value, close + 1)
        },
        Some(byte) if byte.is_ascii_digit() || *byte == b'.' => scan_literal(expression, cursor)?,
        _ => return Err(EvalError::MissingOperand { pos: cursor }),
    };

    values.add(base.powf(exponent));
    Ok(next)
}

/// Evaluates a bracketed sub-expression as an independent expression.
///
/// # Parameters
/// - `sub`: The substring between the brackets, exclusive of both.
/// - `pos`: Offset of the opening bracket, for error reporting.
/// - `debug`: Whether to trace the evaluation.
///
/// # Errors
/// `EmptyExpression` if the brackets enclose nothing; otherwise any error of
/// the recursive evaluation.
fn eval_sub(sub: &str, pos: usize, debug: bool) -> EvalResult<f64> {
    if sub.is_empty() {
        return Err(EvalError::EmptyExpression { pos });
    }

    let value = eval_expression(sub, debug)?;
    if debug {
        debug!("sub-expression '{sub}' = {value}");
    }
    Ok(value)
}

/// Finds the closing bracket matching the opening bracket at `open`.
///
/// Scans forward tracking bracket-nesting depth; the match is the position
/// where the depth returns to zero.
///
/// # Parameters
/// - `expression`: The whitespace-stripped expression text.
/// - `open`: Position of the opening bracket.
///
/// # Returns
/// The position of the matching closing bracket.
///
/// # Errors
/// `UnmatchedBracket` if the input ends before the depth returns to zero.
fn find_closing(expression: &str, open: usize) -> EvalResult<usize> {
    let bytes = expression.as_bytes();
    let mut depth = 1;
    let mut index = open + 1;

    while index < bytes.len() {
        match bytes[index] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            },
            _ => {},
        }
        index += 1;
    }

    Err(EvalError::UnmatchedBracket { pos: open })
}
