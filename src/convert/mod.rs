//! Manual conversion algorithms
//!
//! Each submodule implements one classroom method in the form it would be
//! worked on paper, returning the result digits together with a trace of the
//! intermediate steps:
//! - `integer`: division-remainder method (decimal → binary/octal/hex)
//! - `fraction`: multiplication method (decimal fraction → binary)
//! - `nibble`: 4-bit grouping and expansion (binary ↔ hex)
//! - `positional`: place-value evaluation back to decimal
//! - `table`: the 0-15 quick-reference table
//!
//! All functions are pure and synchronous; the traces they return are value
//! types, rendered elsewhere.

pub mod fraction;
pub mod integer;
pub mod nibble;
pub mod positional;
pub mod table;
