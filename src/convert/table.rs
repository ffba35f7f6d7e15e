//! The 0-15 quick-reference table

use crate::convert::integer;
use crate::models::{Base, TableRow};

/// Build the quick-reference table: every nibble value in decimal, binary
/// (zero-padded to 4 digits), octal, and hex.
pub fn reference_table() -> Vec<TableRow> {
    (0u8..16)
        .map(|value| {
            let n = u64::from(value);
            TableRow {
                value,
                binary: format!("{:0>4}", integer::to_base(n, Base::Binary).digits),
                octal: integer::to_base(n, Base::Octal).digits,
                hex: integer::to_base(n, Base::Hex).digits,
            }
        })
        .collect()
}
