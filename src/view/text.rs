// Plain-text rendering of a TableView
//
// Used by `roster print` and headless mode. Layout:
//
//   roster (15 rows)
//   | Unique ID | Name      | Age ▲ |
//   | [Min]     | [Search...] | [Min] |
//   |-----------|-----------|-------|
//   | 7         | MD. Rijwan | 21 years |
//   [First Page] [Previous] [Next] [Last Page]  Page 1 of 3 | Go to page: 1 | Show 5
//
// Disabled buttons are wrapped in parentheses instead of brackets.

use super::{FilterControl, PagerButton, TableView};
use unicode_width::UnicodeWidthStr;

fn filter_text(filter: &Option<FilterControl>) -> String {
    match filter {
        Some(f) if f.value.is_empty() => format!("[{}]", f.placeholder()),
        Some(f) => format!("[{}]", f.value),
        None => String::new(),
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let inner: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| pad(cell, w))
        .collect();
    format!("| {} |", inner.join(" | "))
}

/// Render a frame as plain text, one line per table row
pub fn render_text(view: &TableView) -> String {
    let titles: Vec<String> = view.headers.iter().map(|h| h.title()).collect();
    let filters: Vec<String> = view.headers.iter().map(|h| filter_text(&h.filter)).collect();

    let mut widths: Vec<usize> = titles
        .iter()
        .zip(&filters)
        .map(|(t, f)| t.width().max(f.width()))
        .collect();
    for row in &view.rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = Vec::new();

    let count = if view.filtered_rows == view.total_rows {
        format!("{} rows", view.total_rows)
    } else {
        format!("{} of {} rows", view.filtered_rows, view.total_rows)
    };
    out.push(format!("{} ({})", view.title, count));

    out.push(line(&titles, &widths));
    if filters.iter().any(|f| !f.is_empty()) {
        out.push(line(&filters, &widths));
    }
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w + 2)).collect();
    out.push(format!("|{}|", rule.join("|")));

    for row in &view.rows {
        out.push(line(row, &widths));
    }

    let footer = &view.footer;
    let buttons: Vec<String> = PagerButton::all()
        .iter()
        .map(|&b| {
            if footer.is_enabled(b) {
                format!("[{}]", b.label())
            } else {
                format!("({})", b.label())
            }
        })
        .collect();
    out.push(format!(
        "{}  {} | Go to page: {} | {}",
        buttons.join(" "),
        footer.page_label(),
        footer.jump_value,
        footer.page_size_label()
    ));

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BuiltinRoster, Field};
    use crate::table::{Action, Table, PAGE_SIZE_OPTIONS};

    fn render(actions: Vec<Action>, page_size: usize) -> String {
        let mut table = Table::with_defaults(Box::new(BuiltinRoster::new()), page_size);
        for action in actions {
            table.dispatch(action);
        }
        render_text(&TableView::build(&table, &PAGE_SIZE_OPTIONS))
    }

    #[test]
    fn first_page_layout() {
        let text = render(vec![], 3);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "roster (15 rows)");
        assert!(lines[1].starts_with("| Unique ID | Name"));
        assert!(lines[2].contains("[Search...]"));
        assert!(lines[4].contains("Rijwan Hossain"));
        assert!(lines[4].contains("30 years"));
        // title, header, filters, rule, 3 rows, footer
        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[7],
            "(First Page) (Previous) [Next] [Last Page]  Page 1 of 5 | Go to page: 1 | Show 3"
        );
    }

    #[test]
    fn empty_result_still_has_header_and_footer() {
        let text = render(vec![Action::SetFilter(Field::Name, "nobody".into())], 5);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "roster (0 of 15 rows)");
        assert!(lines[2].contains("[nobody]"));
        assert_eq!(lines.len(), 5);
        assert!(lines[4].starts_with("(First Page) (Previous) (Next) (Last Page)"));
        assert!(lines[4].contains("Page 1 of 1"));
    }

    #[test]
    fn sorted_header_shows_glyph() {
        let text = render(
            vec![Action::ToggleSort(Field::Age), Action::ToggleSort(Field::Age)],
            5,
        );
        assert!(text.lines().nth(1).unwrap().contains("Age ▼"));
        assert!(text.lines().nth(4).unwrap().contains("45 years"));
    }
}
