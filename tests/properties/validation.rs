//! Validation properties: converters reject bad input with an error, they
//! never panic, and they accept everything their alphabet allows.

use proptest::prelude::*;

use nibbler::convert::{fraction, nibble, positional};
use nibbler::models::Base;

fn any_base() -> impl Strategy<Value = Base> {
    prop_oneof![
        Just(Base::Binary),
        Just(Base::Octal),
        Just(Base::Decimal),
        Just(Base::Hex),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary input never panics any string converter.
    #[test]
    fn property_string_converters_never_panic(input in ".{0,32}", base in any_base()) {
        let _ = nibble::binary_to_hex(&input);
        let _ = nibble::hex_to_binary(&input);
        let _ = positional::evaluate(&input, base);
    }

    /// PROPERTY: every well-formed binary string (with at most one radix
    /// point) evaluates successfully.
    #[test]
    fn property_well_formed_binary_always_evaluates(input in "[01]{1,24}(\\.[01]{1,24})?") {
        let eval = positional::evaluate(&input, Base::Binary).unwrap();
        prop_assert!(eval.value >= 0.0);
    }

    /// PROPERTY: a rejected digit string is reported with the first
    /// offending character.
    #[test]
    fn property_invalid_bit_is_named(prefix in "[01]{0,8}", suffix in "[01]{0,8}") {
        let input = format!("{}x{}", prefix, suffix);
        let err = nibble::binary_to_hex(&input).unwrap_err();
        prop_assert_eq!(
            err,
            nibbler::ConvertError::InvalidDigit {
                digit: 'x',
                base: Base::Binary,
                input,
            }
        );
    }

    /// PROPERTY: everything outside [0, 1) is rejected up front.
    #[test]
    fn property_out_of_range_fractions_are_rejected(f in prop_oneof![1.0f64..1e9, -1e9f64..0.0]) {
        prop_assert_eq!(
            fraction::to_binary(f, 10).unwrap_err(),
            nibbler::ConvertError::FractionOutOfRange { value: f }
        );
    }

    /// PROPERTY: the digit limit bounds the output length for every input.
    #[test]
    fn property_digit_limit_is_respected(f in 0.0f64..1.0, limit in 1usize..32) {
        let conv = fraction::to_binary(f, limit).unwrap();
        prop_assert!(conv.digits.len() <= limit);
        prop_assert_eq!(conv.digits.len(), conv.steps.len());
    }
}
