//! Design tokens for the Nibbler CLI.
//!
//! Design constraints:
//! - Only 4 semantic colors (`colors::*`)
//! - All icons, borders, and operator glyphs must be sourced from this module

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const LESSON: &str = "📖";
    pub const CONVERT: &str = "🔢";
    pub const TABLE: &str = "🧮";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";

    pub const LESSON: &str = "[LESSON]";
    pub const CONVERT: &str = "[CONVERT]";
    pub const TABLE: &str = "[TABLE]";
}

/// Arithmetic glyphs used in step traces.
pub mod ops {
    pub const DIVIDE: &str = "÷";
    pub const MULTIPLY: &str = "×";
    pub const YIELDS: &str = "→";
}

pub mod ops_ascii {
    pub const DIVIDE: &str = "/";
    pub const MULTIPLY: &str = "*";
    pub const YIELDS: &str = "->";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Lesson,
    Convert,
    Table,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Arrow) => icons::ARROW,
            (true, Icon::Lesson) => icons::LESSON,
            (true, Icon::Convert) => icons::CONVERT,
            (true, Icon::Table) => icons::TABLE,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Arrow) => icons_ascii::ARROW,
            (false, Icon::Lesson) => icons_ascii::LESSON,
            (false, Icon::Convert) => icons_ascii::CONVERT,
            (false, Icon::Table) => icons_ascii::TABLE,
        }
    }
}

/// Arithmetic operator glyphs, selected by unicode support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Divide,
    Multiply,
    Yields,
}

impl Op {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Op::Divide) => ops::DIVIDE,
            (true, Op::Multiply) => ops::MULTIPLY,
            (true, Op::Yields) => ops::YIELDS,
            (false, Op::Divide) => ops_ascii::DIVIDE,
            (false, Op::Multiply) => ops_ascii::MULTIPLY,
            (false, Op::Yields) => ops_ascii::YIELDS,
        }
    }
}
