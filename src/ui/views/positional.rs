//! Place-value trace: a positional digit string back to decimal.

use nibbler::models::{Base, Evaluation};

use crate::ui::theme::Op;
use crate::ui::views::notate;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Integer-part contributions, least-significant digit first.
pub fn integer_lines(eval: &Evaluation, base: Base, supports_unicode: bool) -> Vec<String> {
    let multiply = Op::Multiply.render(supports_unicode);
    eval.integer_places
        .iter()
        .map(|p| {
            format!(
                "{} {} {}^{} = {:.0}",
                p.digit, multiply, base, p.power, p.value
            )
        })
        .collect()
}

/// Fractional-part contributions, most-significant digit first.
pub fn fraction_lines(eval: &Evaluation, base: Base, supports_unicode: bool) -> Vec<String> {
    let multiply = Op::Multiply.render(supports_unicode);
    eval.fraction_places
        .iter()
        .map(|p| {
            format!(
                "{} {} {}^{} = {:.3}",
                p.digit, multiply, base, p.power, p.value
            )
        })
        .collect()
}

pub fn render_evaluation(
    input: &str,
    base: Base,
    eval: &Evaluation,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let yields = Op::Yields.render(supports_unicode);

    let mut p = Panel::with_style(PanelStyle::Info);
    p.add_line(format!("Base {} {} decimal (place values)", base, yields));
    p.add_line(format!("Convert {} to decimal:", notate(input, base)));

    if !eval.integer_places.is_empty() {
        p.add_empty();
        p.add_line("Integer part:");
        for line in integer_lines(eval, base, supports_unicode) {
            p.add_line(format!("  {}", line));
        }
    }

    if !eval.fraction_places.is_empty() {
        p.add_empty();
        p.add_line("Fractional part:");
        for line in fraction_lines(eval, base, supports_unicode) {
            p.add_line(format!("  {}", line));
        }
    }

    p.add_empty();
    if eval.fraction_places.is_empty() {
        p.add_line(format!("Total: {:.0}", eval.value));
    } else {
        p.add_line(format!(
            "Total: {:.0} + {:.3} = {:.3}",
            eval.integer_value, eval.fraction_value, eval.value
        ));
    }
    p.render(supports_color, supports_unicode)
}
