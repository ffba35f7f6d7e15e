//! Place-value evaluation of a positional digit string
//!
//! Splits on at most one radix point, then sums digit × base^power with
//! powers running 0, 1, 2, .. right-to-left over the integer part and
//! -1, -2, .. left-to-right over the fractional part.

use crate::error::{ConvertError, ConvertResult};
use crate::models::{Base, Evaluation, PlaceValue};

/// Separator between integer and fractional digits
pub const RADIX_POINT: char = '.';

/// Evaluate a digit string in the given base back to its decimal value.
///
/// The trace lists each digit's contribution in evaluation order: integer
/// digits least-significant first, fractional digits most-significant first,
/// matching how the method is worked on paper.
pub fn evaluate(input: &str, base: Base) -> ConvertResult<Evaluation> {
    if input.matches(RADIX_POINT).count() > 1 {
        return Err(ConvertError::MultipleRadixPoints {
            input: input.to_string(),
        });
    }

    let (integer_part, fraction_part) = match input.split_once(RADIX_POINT) {
        Some((int, frac)) => (int, frac),
        None => (input, ""),
    };
    if integer_part.is_empty() && fraction_part.is_empty() {
        return Err(ConvertError::EmptyDigits(base));
    }

    let radix = base.radix() as f64;

    let mut integer_places = Vec::new();
    let mut integer_value = 0.0;
    for (i, digit) in integer_part.chars().rev().enumerate() {
        let d = digit_value(digit, base, input)?;
        let power = i as i32;
        let value = f64::from(d) * radix.powi(power);
        integer_value += value;
        integer_places.push(PlaceValue {
            digit,
            power,
            value,
        });
    }

    let mut fraction_places = Vec::new();
    let mut fraction_value = 0.0;
    for (i, digit) in fraction_part.chars().enumerate() {
        let d = digit_value(digit, base, input)?;
        let power = -(i as i32 + 1);
        let value = f64::from(d) * radix.powi(power);
        fraction_value += value;
        fraction_places.push(PlaceValue {
            digit,
            power,
            value,
        });
    }

    Ok(Evaluation {
        value: integer_value + fraction_value,
        integer_value,
        fraction_value,
        integer_places,
        fraction_places,
    })
}

fn digit_value(digit: char, base: Base, input: &str) -> ConvertResult<u32> {
    base.digit_value(digit)
        .ok_or_else(|| ConvertError::InvalidDigit {
            digit,
            base,
            input: input.to_string(),
        })
}
