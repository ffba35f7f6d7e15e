//! Error presentation for the CLI.
//!
//! Validation errors already carry the offending input; this module adds the
//! hint a student needs to fix the operand and try again.

use nibbler::models::Base;
use nibbler::ConvertError;

use crate::ui::theme::Icon;
use crate::ui::widgets::panel::{Panel, PanelStyle};

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        println!("{}", output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}

fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut p = Panel::with_style(PanelStyle::Error);
    p.add_line(format!(
        "{} {:#}",
        Icon::Error.render(supports_unicode),
        err
    ));

    if let Some(hint) = err.downcast_ref::<ConvertError>().and_then(hint_for) {
        p.add_line(format!("{} {}", Icon::Arrow.render(supports_unicode), hint));
    }

    p.render(supports_color, supports_unicode)
}

fn hint_for(err: &ConvertError) -> Option<&'static str> {
    match err {
        ConvertError::InvalidDigit {
            base: Base::Binary, ..
        } => Some("binary digits are 0 and 1"),
        ConvertError::InvalidDigit {
            base: Base::Hex, ..
        } => Some("hex digits are 0-9 and A-F, either case"),
        ConvertError::FractionOutOfRange { .. } => {
            Some("give the fractional part only, e.g. 0.625")
        }
        ConvertError::MultipleRadixPoints { .. } => Some("write at most one radix point"),
        _ => None,
    }
}
