//! Terminal rendering of a `RenderedTable`

use comfy_table::{presets, Attribute, Cell, Table, TableComponent};
use console::Style;
use tableviewlib::RenderedTable;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cells wider than this many display columns are cut and marked with "..".
const MAX_CELL_WIDTH: usize = 40;

/// Cut text to `max_width` display columns, marking the cut with a ".." suffix
fn truncate_cell(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(2);
    let mut used = 0;
    let mut kept = String::new();
    for c in text.chars() {
        let width = c.width().unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        kept.push(c);
    }
    format!("{}..", kept)
}

/// Borderless grid with a dashed rule under the bold header row.
fn build_grid(table: &RenderedTable) -> Table {
    let mut grid = Table::new();
    grid.load_preset(presets::NOTHING)
        .set_style(TableComponent::HeaderLines, '-')
        .set_header(table.headers.iter().map(|header| {
            Cell::new(truncate_cell(header, MAX_CELL_WIDTH)).add_attribute(Attribute::Bold)
        }));

    if table.empty_message.is_none() {
        for row in &table.rows {
            grid.add_row(
                row.cells
                    .iter()
                    .map(|cell| Cell::new(truncate_cell(cell, MAX_CELL_WIDTH))),
            );
        }
    }
    grid
}

/// Render a table to a string for printing
pub fn render_table(table: &RenderedTable) -> String {
    let title_style = Style::new().bold();
    let dim = Style::new().dim();
    let mut out = String::new();

    if let Some(title) = &table.title {
        out.push_str(&title_style.apply_to(title).to_string());
        out.push('\n');
    }
    if let Some(label) = &table.filter_label {
        out.push_str(&format!("[{}]\n", label));
    }
    if table.title.is_some() || table.filter_label.is_some() {
        out.push('\n');
    }

    if !table.headers.is_empty() {
        for line in build_grid(table).lines() {
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    if let Some(message) = &table.empty_message {
        out.push_str(message);
        out.push('\n');
    }

    if let Some(status) = &table.status {
        let previous = if status.has_previous {
            "‹ prev".to_string()
        } else {
            dim.apply_to("‹ prev").to_string()
        };
        let next = if status.has_next {
            "next ›".to_string()
        } else {
            dim.apply_to("next ›").to_string()
        };
        out.push('\n');
        out.push_str(&format!(
            "Rows per page: {}    {}    {}  {}\n",
            status.page_size,
            status.label(),
            previous,
            next
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableviewlib::{PageStatus, Pagination, TableRow};

    fn row(key: &str, cells: &[&str]) -> TableRow {
        TableRow {
            key: key.to_string(),
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn sample_table() -> RenderedTable {
        RenderedTable {
            title: Some("Groceries".to_string()),
            filter_label: None,
            headers: vec!["name".to_string(), "price".to_string()],
            rows: vec![
                row("1", &["Milk", "1.99"]),
                row("2", &["Sourdough bread", "4"]),
            ],
            empty_message: None,
            status: Some(PageStatus::new(Pagination::new(0, 5), 2, true)),
        }
    }

    /// Display column at which `needle` starts on the first line containing `anchor`.
    fn column_of(output: &str, anchor: &str, needle: &str) -> usize {
        let line = output
            .lines()
            .find(|line| line.contains(anchor))
            .unwrap_or_else(|| panic!("no line contains {anchor:?}"));
        let at = line.rfind(needle).unwrap();
        line[..at].width()
    }

    #[test]
    fn test_truncate_cell() {
        assert_eq!(truncate_cell("short", 10), "short");
        assert_eq!(truncate_cell("abcdefghij", 6), "abcd..");
        assert_eq!(truncate_cell("ééééé", 4), "éé..");
    }

    #[test]
    fn test_truncate_cell_counts_display_width() {
        assert_eq!(truncate_cell("豆腐", 4), "豆腐");
        assert_eq!(truncate_cell("豆腐豆腐豆腐", 6), "豆腐..");
        assert_eq!(truncate_cell("豆腐豆腐豆腐", 5), "豆..");
    }

    #[test]
    fn test_render_table() {
        let output = render_table(&sample_table());
        assert!(output.contains("Groceries"));
        assert!(output.contains("name"));
        assert!(output.contains("Milk"));
        assert!(output.contains("Sourdough bread"));
        assert!(output.contains("Rows per page: 5"));
        assert!(output.contains("1 - 2 of 2"));

        let price = column_of(&output, "price", "price");
        assert_eq!(column_of(&output, "Milk", "1.99"), price);
        assert_eq!(column_of(&output, "Sourdough", "4"), price);
    }

    #[test]
    fn test_wide_characters_stay_aligned() {
        let table = RenderedTable {
            title: None,
            filter_label: None,
            headers: vec!["name".to_string(), "qty".to_string()],
            rows: vec![row("1", &["豆腐", "1"]), row("2", &["tofu", "2"])],
            empty_message: None,
            status: None,
        };
        let output = render_table(&table);

        let qty = column_of(&output, "qty", "qty");
        assert_eq!(column_of(&output, "豆腐", "1"), qty);
        assert_eq!(column_of(&output, "tofu", "2"), qty);
    }

    #[test]
    fn test_lines_carry_no_trailing_padding() {
        let output = render_table(&sample_table());
        assert!(output.lines().all(|line| line == line.trim_end()));
    }

    #[test]
    fn test_render_empty_state() {
        let mut table = sample_table();
        table.rows.clear();
        table.empty_message = Some("No data to display.".to_string());
        let output = render_table(&table);
        assert!(output.contains("No data to display."));
        assert!(!output.contains("Milk"));
    }
}
