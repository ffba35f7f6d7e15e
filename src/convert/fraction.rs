//! Fraction conversion by the multiplication method
//!
//! Repeatedly double the fraction and peel off the integer part as the next
//! bit. Dyadic fractions terminate when the remainder reaches exactly zero;
//! everything else is truncated at the digit limit, which introduces
//! representation error by design of the method, not of this program.

use crate::error::{ConvertError, ConvertResult};
use crate::models::{FractionConversion, MultiplyStep};

/// Default number of fractional bits to extract before truncating
pub const DEFAULT_DIGIT_LIMIT: usize = 10;

/// Convert a decimal fraction `0 <= f < 1` to binary fractional digits.
///
/// The returned digits carry no `0.` prefix; callers add it for display.
/// An input of exactly zero yields an empty digit string and no steps.
pub fn to_binary(fraction: f64, max_digits: usize) -> ConvertResult<FractionConversion> {
    if !(0.0..1.0).contains(&fraction) {
        return Err(ConvertError::FractionOutOfRange { value: fraction });
    }
    if max_digits == 0 {
        return Err(ConvertError::ZeroDigitLimit);
    }

    let mut digits = String::new();
    let mut steps = Vec::new();
    let mut value = fraction;

    for _ in 0..max_digits {
        if value == 0.0 {
            break;
        }
        let doubled = value * 2.0;
        // value < 1, so doubled < 2 and the truncated part is 0 or 1.
        let bit = doubled as u32;
        steps.push(MultiplyStep {
            value,
            doubled,
            bit,
        });
        digits.push(if bit == 1 { '1' } else { '0' });
        value = doubled - f64::from(bit);
    }

    Ok(FractionConversion {
        digits,
        steps,
        exact: value == 0.0,
    })
}
