//! Terminal rendering for Nibbler.
//!
//! Views are pure `String` builders: they take a conversion result plus the
//! detected terminal capabilities and never print or probe the environment
//! themselves. `main` decides whether a view or a JSON event gets written.

pub mod error;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
