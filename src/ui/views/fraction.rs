//! Multiplication-method trace: decimal fraction to binary.

use nibbler::models::FractionConversion;

use crate::ui::theme::{Icon, Op};
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Trace lines, one per extracted bit.
pub fn step_lines(conv: &FractionConversion, supports_unicode: bool) -> Vec<String> {
    let multiply = Op::Multiply.render(supports_unicode);
    let yields = Op::Yields.render(supports_unicode);
    conv.steps
        .iter()
        .map(|s| {
            format!(
                "{:.6} {} 2 = {:.6} {} bit = {}",
                s.value, multiply, s.doubled, yields, s.bit
            )
        })
        .collect()
}

/// The result digits with the `0.` prefix restored for display.
pub fn display_digits(conv: &FractionConversion) -> String {
    if conv.digits.is_empty() {
        "0.0".to_string()
    } else {
        format!("0.{}", conv.digits)
    }
}

pub fn render_fraction(
    fraction: f64,
    conv: &FractionConversion,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let yields = Op::Yields.render(supports_unicode);

    // Truncated conversions get the warning treatment.
    let style = if conv.exact {
        PanelStyle::Info
    } else {
        PanelStyle::Warning
    };
    let mut p = Panel::with_style(style);
    p.add_line(format!("Decimal fraction {} binary (multiplication method)", yields));
    p.add_line(format!("Convert ({})_10 to binary:", fraction));
    p.add_empty();
    for line in step_lines(conv, supports_unicode) {
        p.add_line(format!("  {}", line));
    }
    p.add_empty();
    p.add_line(format!(
        "{} Result: ({})_2",
        Icon::Arrow.render(supports_unicode),
        display_digits(conv)
    ));
    if !conv.exact {
        p.add_line(format!(
            "{} Truncated after {} digits; this fraction has no finite binary form.",
            Icon::Warning.render(supports_unicode),
            conv.digits.len()
        ));
    }
    p.render(supports_color, supports_unicode)
}
