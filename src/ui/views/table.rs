//! The 0-15 quick-reference table.

use nibbler::models::TableRow;

use crate::ui::theme::Icon;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Aligned table body, one line per value plus the header rule.
pub fn table_lines(rows: &[TableRow]) -> Vec<String> {
    let mut lines = vec![
        "Dec | Bin  | Oct | Hex".to_string(),
        "----|------|-----|----".to_string(),
    ];
    for row in rows {
        lines.push(format!(
            " {:>2} | {} | {:>3} | {:>3}",
            row.value, row.binary, row.octal, row.hex
        ));
    }
    lines
}

pub fn render_table(rows: &[TableRow], supports_color: bool, supports_unicode: bool) -> String {
    let mut p = Panel::with_style(PanelStyle::Info);
    p.add_line(format!(
        "{} Quick reference: 0-15 in four bases",
        Icon::Table.render(supports_unicode)
    ));
    p.add_empty();
    for line in table_lines(rows) {
        p.add_line(line);
    }
    p.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nibbler::convert::table::reference_table;

    #[test]
    fn table_has_header_rule_and_sixteen_rows() {
        let lines = table_lines(&reference_table());
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "Dec | Bin  | Oct | Hex");
    }

    #[test]
    fn row_ten_is_aligned() {
        let lines = table_lines(&reference_table());
        assert_eq!(lines[12], " 10 | 1010 |  12 |   A");
    }

    #[test]
    fn rendered_table_is_bordered() {
        let block = render_table(&reference_table(), false, true);
        assert!(block.starts_with('╭'));
    }
}
