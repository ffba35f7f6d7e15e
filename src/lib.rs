//! Nibbler - terminal tutor for number-base conversion
//!
//! Nibbler demonstrates the manual algorithms for moving between decimal,
//! binary, octal, and hexadecimal: division-remainder, multiplication of
//! fractions, 4-bit grouping, and place-value evaluation. Every converter
//! returns its result together with a trace of the intermediate steps, so
//! the terminal output can show the work the way it is done on paper.

pub mod convert;
pub mod error;
pub mod models;

// Re-exports for convenience
pub use convert::fraction::DEFAULT_DIGIT_LIMIT;
pub use convert::nibble::{binary_to_hex, hex_to_binary, NIBBLE_TABLE};
pub use convert::positional::{evaluate, RADIX_POINT};
pub use convert::table::reference_table;
pub use error::{ConvertError, ConvertResult};
pub use models::{
    Base, DivisionStep, Evaluation, Expansion, FractionConversion, GroupedHex, IntegerConversion,
    MultiplyStep, NibbleExpansion, PlaceValue, TableRow,
};
