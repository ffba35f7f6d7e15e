//! Round-trip properties across the converters.

use proptest::prelude::*;

use nibbler::convert::{fraction, integer, nibble, positional};
use nibbler::models::Base;
use nibbler::NIBBLE_TABLE;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the division method agrees with the standard formatter in
    /// every supported base.
    #[test]
    fn property_division_digits_match_std_formatting(n in any::<u64>()) {
        prop_assert_eq!(integer::to_binary(n).digits, format!("{:b}", n));
        prop_assert_eq!(integer::to_base(n, Base::Octal).digits, format!("{:o}", n));
        prop_assert_eq!(integer::to_base(n, Base::Decimal).digits, format!("{}", n));
        prop_assert_eq!(integer::to_base(n, Base::Hex).digits, format!("{:X}", n));
    }

    /// PROPERTY: evaluating the produced binary digits returns the input
    /// (within the f64-exact integer range).
    #[test]
    fn property_integer_roundtrip(n in 0u64..(1 << 53)) {
        let conv = integer::to_binary(n);
        let eval = positional::evaluate(&conv.digits, Base::Binary).unwrap();
        prop_assert_eq!(eval.value, n as f64);
    }

    /// PROPERTY: expansion inverts grouping when the bit count is already a
    /// multiple of 4 (no padding enters the round trip).
    #[test]
    fn property_grouping_roundtrip(values in proptest::collection::vec(0usize..16, 1..16)) {
        let bits: String = values.iter().map(|&v| NIBBLE_TABLE[v].0).collect();
        let grouped = nibble::binary_to_hex(&bits).unwrap();
        prop_assert_eq!(grouped.groups.len(), values.len());

        let back = nibble::hex_to_binary(&grouped.digits).unwrap();
        prop_assert_eq!(back.bits, bits);
    }

    /// PROPERTY: grouping inverts expansion for any valid hex string, up to
    /// case normalization.
    #[test]
    fn property_expansion_roundtrip(hex in "[0-9a-fA-F]{1,16}") {
        let expanded = nibble::hex_to_binary(&hex).unwrap();
        prop_assert_eq!(expanded.bits.len(), hex.len() * 4);

        let grouped = nibble::binary_to_hex(&expanded.bits).unwrap();
        prop_assert_eq!(grouped.digits, hex.to_uppercase());
    }

    /// PROPERTY: the multiplication method truncates, never rounds up, and
    /// the truncation error stays below one unit in the last extracted place.
    #[test]
    fn property_fraction_truncation_error_is_bounded(f in 0.0f64..1.0) {
        let conv = fraction::to_binary(f, 20).unwrap();
        prop_assert!(conv.digits.len() <= 20);

        let eval = positional::evaluate(&format!("0.{}", conv.digits), Base::Binary).unwrap();
        if conv.exact {
            prop_assert_eq!(eval.value, f);
        } else {
            prop_assert!(eval.value <= f);
            prop_assert!(f - eval.value < 2f64.powi(-20));
        }
    }

    /// PROPERTY: every binary string of nibble-aligned length survives the
    /// hex round trip untouched (spec round-trip stated over raw bits).
    #[test]
    fn property_aligned_bits_roundtrip(bits in "[01]{4}([01]{4}){0,7}") {
        let grouped = nibble::binary_to_hex(&bits).unwrap();
        let back = nibble::hex_to_binary(&grouped.digits).unwrap();
        prop_assert_eq!(back.bits, bits);
    }
}
