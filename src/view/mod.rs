//! Render-agnostic snapshot of one table frame
//!
//! Both the terminal UI and the plain-text printer draw from a [`TableView`],
//! so everything the user can see (sort glyphs, filter placeholders, button
//! enablement, the page indicator) is decided here once.

mod text;

pub use text::render_text;

use crate::data::Field;
use crate::table::{ColumnKind, Table};

/// What a filter input looks like and holds
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControl {
    pub field: Field,
    pub kind: ColumnKind,
    pub value: String,
}

impl FilterControl {
    pub fn placeholder(&self) -> &'static str {
        match self.kind {
            ColumnKind::Numeric => "Min",
            ColumnKind::Text => "Search...",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub field: Field,
    pub label: String,
    pub sort_indicator: Option<&'static str>,
    pub can_sort: bool,
    pub filter: Option<FilterControl>,
}

impl HeaderCell {
    /// Label followed by the sort glyph, if sorted
    pub fn title(&self) -> String {
        match self.sort_indicator {
            Some(glyph) => format!("{} {}", self.label, glyph),
            None => self.label.clone(),
        }
    }
}

/// Footer navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagerButton {
    First,
    Previous,
    Next,
    Last,
}

impl PagerButton {
    pub fn all() -> &'static [PagerButton] {
        &[
            PagerButton::First,
            PagerButton::Previous,
            PagerButton::Next,
            PagerButton::Last,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PagerButton::First => "First Page",
            PagerButton::Previous => "Previous",
            PagerButton::Next => "Next",
            PagerButton::Last => "Last Page",
        }
    }

    /// Single-glyph label for narrow terminals
    pub fn short_label(&self) -> &'static str {
        match self {
            PagerButton::First => "«",
            PagerButton::Previous => "‹",
            PagerButton::Next => "›",
            PagerButton::Last => "»",
        }
    }

    pub fn action(&self) -> crate::table::Action {
        use crate::table::Action;
        match self {
            PagerButton::First => Action::FirstPage,
            PagerButton::Previous => Action::PreviousPage,
            PagerButton::Next => Action::NextPage,
            PagerButton::Last => Action::LastPage,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterView {
    pub can_previous: bool,
    pub can_next: bool,
    /// 1-based page shown to the user
    pub page_number: usize,
    pub page_count: usize,
    pub jump_value: String,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl FooterView {
    pub fn is_enabled(&self, button: PagerButton) -> bool {
        match button {
            PagerButton::First | PagerButton::Previous => self.can_previous,
            PagerButton::Next | PagerButton::Last => self.can_next,
        }
    }

    pub fn page_label(&self) -> String {
        format!(
            "Page {} of {}",
            self.page_number,
            format_number(self.page_count as u64)
        )
    }

    pub fn page_size_label(&self) -> String {
        format!("Show {}", self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub title: String,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Vec<String>>,
    pub footer: FooterView,
    pub filtered_rows: usize,
    pub total_rows: usize,
}

impl TableView {
    pub fn build(table: &Table, page_size_options: &[usize]) -> Self {
        let headers = table
            .header_group()
            .into_iter()
            .map(|h| HeaderCell {
                field: h.column.accessor,
                label: h.column.header.clone(),
                sort_indicator: h.sort.map(|d| d.indicator()),
                can_sort: h.can_sort(),
                filter: h.can_filter().then(|| FilterControl {
                    field: h.column.accessor,
                    kind: h.column.kind,
                    value: h.filter.map(|f| f.input_text()).unwrap_or_default(),
                }),
            })
            .collect();

        let rows = table
            .rows()
            .iter()
            .map(|row| row.cells(table.columns()))
            .collect();

        let pagination = table.pagination();
        let footer = FooterView {
            can_previous: table.can_previous_page(),
            can_next: table.can_next_page(),
            page_number: pagination.page_index + 1,
            page_count: table.page_count(),
            jump_value: (pagination.page_index + 1).to_string(),
            page_size: pagination.page_size,
            page_size_options: page_size_options.to_vec(),
        };

        Self {
            title: table.model().source_name().to_string(),
            headers,
            rows,
            footer,
            filtered_rows: table.filtered_row_count(),
            total_rows: table.total_row_count(),
        }
    }

    /// Show raw input text in a column's filter box instead of the parsed value
    pub fn set_filter_text(&mut self, field: Field, text: &str) {
        for header in &mut self.headers {
            if let Some(filter) = header.filter.as_mut().filter(|f| f.field == field) {
                filter.value = text.to_string();
            }
        }
    }

    /// Tab-separated header and rows
    pub fn to_tsv(&self) -> String {
        let mut out = self
            .headers
            .iter()
            .map(|h| h.label.as_str())
            .collect::<Vec<_>>()
            .join("\t");
        for row in &self.rows {
            out.push('\n');
            out.push_str(&row.join("\t"));
        }
        out
    }
}

/// Format a number with commas for readability
///
/// # Examples
/// ```ignore
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, ch) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BuiltinRoster;
    use crate::table::{Action, PAGE_SIZE_OPTIONS};

    fn view_after(actions: Vec<Action>) -> TableView {
        let mut table = Table::with_defaults(Box::new(BuiltinRoster::new()), 5);
        for action in actions {
            table.dispatch(action);
        }
        TableView::build(&table, &PAGE_SIZE_OPTIONS)
    }

    #[test]
    fn initial_frame() {
        let view = view_after(vec![]);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0], vec!["1", "Rijwan Hossain", "30 years"]);
        assert_eq!(view.footer.page_label(), "Page 1 of 3");
        assert_eq!(view.footer.page_size_label(), "Show 5");
        assert!(!view.footer.is_enabled(PagerButton::First));
        assert!(!view.footer.is_enabled(PagerButton::Previous));
        assert!(view.footer.is_enabled(PagerButton::Next));
        assert!(view.footer.is_enabled(PagerButton::Last));
    }

    #[test]
    fn filter_controls_follow_column_kind() {
        let view = view_after(vec![]);
        let placeholders: Vec<&str> = view
            .headers
            .iter()
            .map(|h| h.filter.as_ref().unwrap().placeholder())
            .collect();
        assert_eq!(placeholders, vec!["Min", "Search...", "Min"]);
    }

    #[test]
    fn sort_indicator_in_title() {
        let view = view_after(vec![Action::ToggleSort(Field::Age)]);
        assert_eq!(view.headers[2].title(), "Age ▲");
        let view = view_after(vec![
            Action::ToggleSort(Field::Age),
            Action::ToggleSort(Field::Age),
        ]);
        assert_eq!(view.headers[2].title(), "Age ▼");
        assert_eq!(view.headers[1].title(), "Name");
    }

    #[test]
    fn filter_value_shows_in_control() {
        let mut view = view_after(vec![Action::SetFilter(Field::Age, "25".into())]);
        assert_eq!(view.headers[2].filter.as_ref().unwrap().value, "25");
        view.set_filter_text(Field::Age, "25.");
        assert_eq!(view.headers[2].filter.as_ref().unwrap().value, "25.");
    }

    #[test]
    fn last_page_disables_forward_buttons() {
        let view = view_after(vec![Action::LastPage]);
        assert_eq!(view.footer.page_label(), "Page 3 of 3");
        assert!(!view.footer.is_enabled(PagerButton::Next));
        assert!(!view.footer.is_enabled(PagerButton::Last));
        assert!(view.footer.is_enabled(PagerButton::Previous));
    }

    #[test]
    fn tsv_export() {
        let view = view_after(vec![Action::SetFilter(Field::Name, "azman".into())]);
        assert_eq!(view.to_tsv(), "Unique ID\tName\tAge\n14\tAzman\t25 years");
    }

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(999), "999");
    }
}
