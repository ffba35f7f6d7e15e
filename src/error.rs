//! Error types for Nibbler
//!
//! Uses `thiserror` for library errors. Every failure is an input-validation
//! failure raised before or during a conversion; there is no recovery policy.

use thiserror::Error;

use crate::models::Base;

/// Result type alias for Nibbler conversions
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Main error type for Nibbler conversions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Empty digit string where at least one digit is required
    #[error("empty digit string - expected at least one base-{0} digit")]
    EmptyDigits(Base),

    /// A character outside the alphabet of the stated base
    #[error("invalid digit '{digit}' for base {base} in \"{input}\"")]
    InvalidDigit {
        digit: char,
        base: Base,
        input: String,
    },

    /// Fraction outside the convertible range
    #[error("fraction {value} is outside [0, 1)")]
    FractionOutOfRange { value: f64 },

    /// A digit limit of zero would make every fraction unconvertible
    #[error("digit limit must be at least 1")]
    ZeroDigitLimit,

    /// More than one radix point in a positional input
    #[error("more than one radix point in \"{input}\"")]
    MultipleRadixPoints { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_digit() {
        let err = ConvertError::InvalidDigit {
            digit: '2',
            base: Base::Binary,
            input: "102".to_string(),
        };
        assert_eq!(err.to_string(), "invalid digit '2' for base 2 in \"102\"");
    }

    #[test]
    fn test_error_display_empty_digits() {
        let err = ConvertError::EmptyDigits(Base::Hex);
        assert_eq!(
            err.to_string(),
            "empty digit string - expected at least one base-16 digit"
        );
    }

    #[test]
    fn test_error_display_fraction_out_of_range() {
        let err = ConvertError::FractionOutOfRange { value: 1.5 };
        assert_eq!(err.to_string(), "fraction 1.5 is outside [0, 1)");
    }

    #[test]
    fn test_error_display_multiple_radix_points() {
        let err = ConvertError::MultipleRadixPoints {
            input: "1.0.1".to_string(),
        };
        assert_eq!(err.to_string(), "more than one radix point in \"1.0.1\"");
    }
}
