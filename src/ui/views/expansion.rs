//! Nibble expansion trace: hexadecimal to binary.

use nibbler::models::{Base, Expansion};

use crate::ui::theme::{Icon, Op};
use crate::ui::views::notate;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// One line per hex digit and its 4-bit expansion.
pub fn digit_lines(conv: &Expansion, supports_unicode: bool) -> Vec<String> {
    let yields = Op::Yields.render(supports_unicode);
    conv.nibbles
        .iter()
        .map(|n| format!("{} {} {}", n.digit, yields, n.bits))
        .collect()
}

pub fn render_expansion(
    hex: &str,
    conv: &Expansion,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let yields = Op::Yields.render(supports_unicode);

    let mut p = Panel::with_style(PanelStyle::Info);
    p.add_line(format!("Hexadecimal {} binary (one nibble per digit)", yields));
    p.add_line(format!("Convert {} to binary:", notate(hex, Base::Hex)));
    p.add_empty();
    for line in digit_lines(conv, supports_unicode) {
        p.add_line(format!("  {}", line));
    }
    p.add_empty();
    p.add_line(format!(
        "{} Result: {}",
        Icon::Arrow.render(supports_unicode),
        notate(&conv.bits, Base::Binary)
    ));
    p.render(supports_color, supports_unicode)
}
