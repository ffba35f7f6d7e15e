//! Division-method trace: decimal integer to another base.

use nibbler::models::IntegerConversion;

use crate::ui::theme::{Icon, Op};
use crate::ui::views::notate;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Trace lines, one per division performed.
pub fn step_lines(conv: &IntegerConversion, supports_unicode: bool) -> Vec<String> {
    let divide = Op::Divide.render(supports_unicode);
    let radix = conv.base.radix();
    conv.steps
        .iter()
        .map(|s| {
            format!(
                "{} {} {} = {} remainder {}",
                s.dividend, divide, radix, s.quotient, s.remainder
            )
        })
        .collect()
}

pub fn render_division(
    n: u64,
    conv: &IntegerConversion,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let yields = Op::Yields.render(supports_unicode);

    let mut p = Panel::with_style(PanelStyle::Info);
    p.add_line(format!(
        "{} Decimal {} {} (division method)",
        Icon::Convert.render(supports_unicode),
        yields,
        conv.base.name()
    ));
    p.add_line(format!("Convert ({})_10 to base {}:", n, conv.base));
    p.add_empty();
    for line in step_lines(conv, supports_unicode) {
        p.add_line(format!("  {}", line));
    }
    if conv.steps.is_empty() {
        p.add_line("  zero needs no division");
    }
    p.add_empty();
    p.add_line(format!(
        "Reading remainders bottom-to-top: {}",
        notate(&conv.digits, conv.base)
    ));
    p.render(supports_color, supports_unicode)
}
