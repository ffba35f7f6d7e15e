//! Binary ↔ hexadecimal conversion through the fixed nibble table
//!
//! One hex digit corresponds to exactly one 4-bit group, so the conversion
//! is a table lookup in either direction. The table is a compile-time
//! constant, indexed by nibble value 0-15.

use crate::error::{ConvertError, ConvertResult};
use crate::models::{Base, Expansion, GroupedHex, NibbleExpansion};

/// The 16-entry nibble table: canonical 4-bit form and hex digit, indexed by
/// nibble value.
pub const NIBBLE_TABLE: [(&str, char); 16] = [
    ("0000", '0'),
    ("0001", '1'),
    ("0010", '2'),
    ("0011", '3'),
    ("0100", '4'),
    ("0101", '5'),
    ("0110", '6'),
    ("0111", '7'),
    ("1000", '8'),
    ("1001", '9'),
    ("1010", 'A'),
    ("1011", 'B'),
    ("1100", 'C'),
    ("1101", 'D'),
    ("1110", 'E'),
    ("1111", 'F'),
];

/// Convert a binary digit string to hexadecimal by 4-bit grouping.
///
/// The input is left-padded with zeros to a multiple of 4 bits, split into
/// consecutive groups, and each group mapped through the nibble table. The
/// groups are returned alongside the digits for display.
pub fn binary_to_hex(bits: &str) -> ConvertResult<GroupedHex> {
    if bits.is_empty() {
        return Err(ConvertError::EmptyDigits(Base::Binary));
    }
    for c in bits.chars() {
        if Base::Binary.digit_value(c).is_none() {
            return Err(ConvertError::InvalidDigit {
                digit: c,
                base: Base::Binary,
                input: bits.to_string(),
            });
        }
    }

    // A string already a multiple of 4 gets no padding.
    let padding = (4 - bits.len() % 4) % 4;
    let padded: Vec<char> = "0"
        .repeat(padding)
        .chars()
        .chain(bits.chars())
        .collect();

    let mut digits = String::new();
    let mut groups = Vec::new();
    for group in padded.chunks(4) {
        let value = group
            .iter()
            .fold(0usize, |acc, c| acc * 2 + (*c == '1') as usize);
        digits.push(NIBBLE_TABLE[value].1);
        groups.push(group.iter().collect());
    }

    Ok(GroupedHex { digits, groups })
}

/// Expand a hexadecimal digit string to binary, one nibble per digit.
///
/// Lowercase digits are normalized to uppercase before lookup. Leading zeros
/// inside each nibble are intentionally preserved, so the result is always
/// exactly 4 × the input length.
pub fn hex_to_binary(hex: &str) -> ConvertResult<Expansion> {
    if hex.is_empty() {
        return Err(ConvertError::EmptyDigits(Base::Hex));
    }

    let mut bits = String::with_capacity(hex.len() * 4);
    let mut nibbles = Vec::with_capacity(hex.len());
    for c in hex.chars() {
        let value = Base::Hex
            .digit_value(c)
            .ok_or_else(|| ConvertError::InvalidDigit {
                digit: c,
                base: Base::Hex,
                input: hex.to_string(),
            })?;
        let expansion = NIBBLE_TABLE[value as usize].0;
        bits.push_str(expansion);
        nibbles.push(NibbleExpansion {
            digit: c.to_ascii_uppercase(),
            bits: expansion.to_string(),
        });
    }

    Ok(Expansion { bits, nibbles })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_of_four_map_to_29a() {
        let conv = binary_to_hex("001010011010").unwrap();
        assert_eq!(conv.digits, "29A");
        assert_eq!(conv.groups, vec!["0010", "1001", "1010"]);
    }

    #[test]
    fn short_input_is_left_padded() {
        let conv = binary_to_hex("1010011010").unwrap();
        assert_eq!(conv.digits, "29A");
        assert_eq!(conv.groups[0], "0010");
    }

    #[test]
    fn single_bit_pads_to_one_group() {
        let conv = binary_to_hex("1").unwrap();
        assert_eq!(conv.digits, "1");
        assert_eq!(conv.groups, vec!["0001"]);
    }

    #[test]
    fn rejects_non_binary_digits() {
        assert_eq!(
            binary_to_hex("10201"),
            Err(ConvertError::InvalidDigit {
                digit: '2',
                base: Base::Binary,
                input: "10201".to_string(),
            })
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(binary_to_hex(""), Err(ConvertError::EmptyDigits(Base::Binary)));
        assert_eq!(hex_to_binary(""), Err(ConvertError::EmptyDigits(Base::Hex)));
    }

    #[test]
    fn expands_3d5() {
        let conv = hex_to_binary("3D5").unwrap();
        assert_eq!(conv.bits, "001111010101");
        assert_eq!(conv.nibbles.len(), 3);
        assert_eq!(conv.nibbles[1].digit, 'D');
        assert_eq!(conv.nibbles[1].bits, "1101");
    }

    #[test]
    fn expansion_is_case_insensitive() {
        let lower = hex_to_binary("3d5").unwrap();
        let upper = hex_to_binary("3D5").unwrap();
        assert_eq!(lower.bits, upper.bits);
        assert_eq!(lower.nibbles[1].digit, 'D');
    }

    #[test]
    fn expansion_preserves_nibble_leading_zeros() {
        let conv = hex_to_binary("1").unwrap();
        assert_eq!(conv.bits, "0001");
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(matches!(
            hex_to_binary("3G5"),
            Err(ConvertError::InvalidDigit { digit: 'G', .. })
        ));
    }

    #[test]
    fn table_covers_every_nibble_value_once() {
        for (value, (bits, digit)) in NIBBLE_TABLE.iter().enumerate() {
            let decoded = bits
                .chars()
                .fold(0usize, |acc, c| acc * 2 + (c == '1') as usize);
            assert_eq!(decoded, value);
            assert_eq!(Base::Hex.digit_value(*digit), Some(value as u32));
        }
    }
}
