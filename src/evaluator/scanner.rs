use crate::{error::EvalError, evaluator::core::EvalResult};

/// Upper bound on the number of digits scanned after the decimal point.
///
/// Once the bound is reached the literal ends, even if more digits follow.
/// This is a defensive bound against runaway fractional scanning, not a
/// rounding rule.
pub const MAX_FRACTIONAL_DIGITS: i32 = 10;

/// Scans a numeric literal starting at the given cursor position.
///
/// Consumes the maximal run of digits containing at most one decimal point.
/// Integer digits shift the accumulator left by one decimal order; the
/// fractional digit at position `n` after the point contributes
/// `digit / 10^n`. The literal may begin with the decimal point, so `.5`
/// scans as `0.5`.
///
/// Scanning stops at the first character that is neither a digit nor the
/// point, at the end of the input, or once [`MAX_FRACTIONAL_DIGITS`] digits
/// have been consumed after the point (the overflowing digit is left
/// unconsumed).
///
/// # Parameters
/// - `expression`: The whitespace-stripped expression text.
/// - `start`: Cursor position of the first character of the literal.
///
/// # Returns
/// The parsed value and the cursor position immediately past the consumed
/// run.
///
/// # Errors
/// Returns `MalformedLiteral` if the run contains a second decimal point or
/// no digits at all (a lone point is not a literal).
///
/// # Example
/// ```
/// use stacalc::evaluator::scanner::scan_literal;
///
/// let (value, next) = scan_literal("2.5+1", 0).unwrap();
/// assert_eq!(value, 2.5);
/// assert_eq!(next, 3);
///
/// assert!(scan_literal("1.5.2", 0).is_err());
/// ```
pub fn scan_literal(expression: &str, start: usize) -> EvalResult<(f64, usize)> {
    let bytes = expression.as_bytes();
    let mut index = start;
    let mut value = 0.0;
    let mut digits = 0;
    let mut fractional = false;
    let mut fractional_digits = 0;

    while index < bytes.len() {
        let byte = bytes[index];

        if byte == b'.' {
            if fractional {
                return Err(EvalError::MalformedLiteral { pos: index });
            }
            fractional = true;
            index += 1;
            continue;
        }

        if !byte.is_ascii_digit() {
            break;
        }

        let digit = f64::from(byte - b'0');
        digits += 1;
        if fractional {
            fractional_digits += 1;
            if fractional_digits > MAX_FRACTIONAL_DIGITS {
                break;
            }
            value += digit / 10f64.powi(fractional_digits);
        } else {
            value = value * 10.0 + digit;
        }
        index += 1;
    }

    if digits == 0 {
        return Err(EvalError::MalformedLiteral { pos: start });
    }

    Ok((value, index))
}
