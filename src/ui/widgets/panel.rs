//! Bordered panel used by every view for headers and result blocks.

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Panel {
    lines: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn with_style(style: PanelStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.lines.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.lines.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let inner_width = self
            .lines
            .iter()
            .map(|l| l.width())
            .max()
            .unwrap_or(0)
            .saturating_add(2);

        let b = if supports_unicode {
            [
                theme::borders::TOP_LEFT,
                theme::borders::TOP_RIGHT,
                theme::borders::BOTTOM_LEFT,
                theme::borders::BOTTOM_RIGHT,
                theme::borders::HORIZONTAL,
                theme::borders::VERTICAL,
            ]
        } else {
            [
                theme::borders_ascii::TOP_LEFT,
                theme::borders_ascii::TOP_RIGHT,
                theme::borders_ascii::BOTTOM_LEFT,
                theme::borders_ascii::BOTTOM_RIGHT,
                theme::borders_ascii::HORIZONTAL,
                theme::borders_ascii::VERTICAL,
            ]
        };
        let [tl, tr, bl, br, h, v] = b;

        let mut out = String::new();
        let top = format!("{}{}{}", tl, h.repeat(inner_width), tr);
        out.push_str(&self.color_border(&top, supports_color));
        out.push('\n');

        for line in &self.lines {
            let pad = inner_width.saturating_sub(1).saturating_sub(line.width());
            out.push_str(&self.color_border(v, supports_color));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(&self.color_border(v, supports_color));
            out.push('\n');
        }

        let bottom = format!("{}{}{}", bl, h.repeat(inner_width), br);
        out.push_str(&self.color_border(&bottom, supports_color));
        out.push('\n');
        out
    }

    fn color_border(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }
        let color = match self.style {
            PanelStyle::Info => theme::colors::INFO,
            PanelStyle::Success => theme::colors::SUCCESS,
            PanelStyle::Warning => theme::colors::WARNING,
            PanelStyle::Error => theme::colors::ERROR,
        };
        format!("{}", s.with(color))
    }
}
