//! Integer conversion by the division-remainder method
//!
//! Repeatedly divide by the radix and collect remainders; reading the
//! remainders in reverse order of extraction yields the digit string.

use crate::models::{Base, DivisionStep, IntegerConversion};

/// Convert a non-negative integer to digits in the given base.
///
/// Zero is the conventional special case: the single digit `"0"` with no
/// steps. Every other input produces ⌈log_radix(n+1)⌉ steps, one per
/// division performed.
pub fn to_base(n: u64, base: Base) -> IntegerConversion {
    if n == 0 {
        return IntegerConversion {
            digits: "0".to_string(),
            base,
            steps: Vec::new(),
        };
    }

    let radix = base.radix() as u64;
    let mut digits = String::new();
    let mut steps = Vec::new();
    let mut n = n;

    while n > 0 {
        let quotient = n / radix;
        let remainder = (n % radix) as u32;
        steps.push(DivisionStep {
            dividend: n,
            quotient,
            remainder,
        });
        // Remainders come out least-significant first.
        digits.insert(0, base.digit_char(remainder));
        n = quotient;
    }

    IntegerConversion {
        digits,
        base,
        steps,
    }
}

/// Convert a non-negative integer to binary, the traced textbook case.
pub fn to_binary(n: u64) -> IntegerConversion {
    to_base(n, Base::Binary)
}
