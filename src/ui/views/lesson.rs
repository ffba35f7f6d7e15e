//! Framing blocks for the full lesson: title banner and key-concepts recap.

use crate::ui::theme::{Icon, Op};
use crate::ui::widgets::panel::{Panel, PanelStyle};

pub fn render_header(supports_color: bool, supports_unicode: bool) -> String {
    // Panel content stays uncolored; only borders carry color.
    let icon = Icon::Lesson.render(supports_unicode);

    let mut p = Panel::with_style(PanelStyle::Info);
    p.add_line(format!("{} Number System Conversions", icon));
    p.add_line("Binary, octal, decimal, and hexadecimal - worked by hand");
    p.render(supports_color, supports_unicode)
}

pub fn render_recap(supports_color: bool, supports_unicode: bool) -> String {
    let yields = Op::Yields.render(supports_unicode);

    let mut p = Panel::with_style(PanelStyle::Success);
    p.add_line(format!(
        "{} Key concepts",
        Icon::Success.render(supports_unicode)
    ));
    p.add_empty();
    p.add_line(format!("Decimal {} binary: divide by 2, read remainders upward", yields));
    p.add_line(format!("Binary {} hex: group 4 bits", yields));
    p.add_line(format!("Hex {} binary: each hex digit is 4 bits", yields));
    p.add_line("Fractions: multiply by 2, take the integer part");
    p.render(supports_color, supports_unicode)
}
