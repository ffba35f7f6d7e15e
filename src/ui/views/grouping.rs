//! 4-bit grouping trace: binary to hexadecimal.

use nibbler::models::{Base, GroupedHex};

use crate::ui::theme::{Icon, Op};
use crate::ui::views::notate;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// One line per 4-bit group: the group, its decimal value, its hex digit.
pub fn group_lines(conv: &GroupedHex) -> Vec<String> {
    conv.groups
        .iter()
        .zip(conv.digits.chars())
        .map(|(group, digit)| {
            let value = group
                .chars()
                .fold(0u32, |acc, c| acc * 2 + u32::from(c == '1'));
            format!("{} = {} = {}", group, value, digit)
        })
        .collect()
}

pub fn render_grouping(
    bits: &str,
    conv: &GroupedHex,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let yields = Op::Yields.render(supports_unicode);

    let mut p = Panel::with_style(PanelStyle::Info);
    p.add_line(format!("Binary {} hexadecimal (4-bit groups)", yields));
    p.add_line(format!(
        "Convert {} to hexadecimal:",
        notate(bits, Base::Binary)
    ));
    p.add_empty();
    for line in group_lines(conv) {
        p.add_line(format!("  {}", line));
    }
    p.add_empty();
    p.add_line(format!(
        "{} Result: {}",
        Icon::Arrow.render(supports_unicode),
        notate(&conv.digits, Base::Hex)
    ));
    p.render(supports_color, supports_unicode)
}
