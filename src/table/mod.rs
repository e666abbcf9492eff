//! Table model: sorting, filtering and pagination over an injected data source
//!
//! ```text
//!   DataSource ──► filter ──► stable sort ──► page slice ──► rows()
//!                    ▲             ▲               ▲
//!                    └──────── TableState ─────────┘
//!                                  ▲
//!                   Action ──► TableModel::reduce
//! ```
//!
//! [`TableModel`] is immutable; all user-driven change goes through
//! [`TableModel::reduce`]. [`Table`] pairs a model with its current state and
//! caches the sorted row order between dispatches.

mod column;
mod filter;
mod model;
mod pagination;
mod sort;
mod state;
mod value;

pub use column::{default_columns, roster_columns, ColumnDef, ColumnKind};
pub use filter::FilterValue;
pub use model::TableModel;
pub use pagination::{
    page_count, step_page_size, PaginationState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
pub use sort::{ColumnSort, SortDirection};
pub use state::{Action, TableState};
pub use value::CellValue;

use crate::data::{DataSource, Field, Record};

/// A header cell of the single header group
#[derive(Debug)]
pub struct Header<'a> {
    pub column: &'a ColumnDef,
    pub sort: Option<SortDirection>,
    pub filter: Option<&'a FilterValue>,
}

impl Header<'_> {
    pub fn can_sort(&self) -> bool {
        self.column.sortable
    }

    pub fn can_filter(&self) -> bool {
        self.column.filterable
    }
}

/// One row of the row model
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub record: &'a Record,
}

impl Row<'_> {
    /// Rendered cell text, one per column
    pub fn cells(&self, columns: &[ColumnDef]) -> Vec<String> {
        columns.iter().map(|c| c.render(self.record)).collect()
    }
}

/// A model plus its current state
pub struct Table {
    model: TableModel,
    state: TableState,
    /// Filtered and sorted source indices for the current state
    order: Vec<usize>,
}

impl Table {
    pub fn new(source: Box<dyn DataSource>, columns: Vec<ColumnDef>, state: TableState) -> Self {
        let model = TableModel::new(source, columns);
        let order = model.sorted_indices(&state);
        Self {
            model,
            state,
            order,
        }
    }

    /// The built-in columns over `source`
    pub fn with_defaults(source: Box<dyn DataSource>, page_size: usize) -> Self {
        Self::new(
            source,
            default_columns(),
            TableState::with_page_size(page_size),
        )
    }

    /// Apply an action and refresh the cached row order
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("dispatch {:?}", action);
        let next = self.model.reduce(&self.state, action);
        if next == self.state {
            return;
        }
        if next.sorting != self.state.sorting || next.filters != self.state.filters {
            self.order = self.model.sorted_indices(&next);
        }
        self.state = next;
        tracing::debug!(
            "page {}/{} size {} rows {}",
            self.state.pagination.page_index + 1,
            self.page_count(),
            self.state.pagination.page_size,
            self.order.len()
        );
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn columns(&self) -> &[ColumnDef] {
        self.model.columns()
    }

    #[cfg(test)]
    pub fn sorting(&self) -> Option<ColumnSort> {
        self.state.sorting
    }

    pub fn pagination(&self) -> PaginationState {
        self.state.pagination
    }

    pub fn filter_value(&self, field: Field) -> Option<&FilterValue> {
        self.state.filters.get(field)
    }

    pub fn header_group(&self) -> Vec<Header<'_>> {
        self.model
            .columns()
            .iter()
            .map(|column| Header {
                column,
                sort: self
                    .state
                    .sorting
                    .filter(|s| s.field == column.accessor)
                    .map(|s| s.direction),
                filter: self.state.filters.get(column.accessor),
            })
            .collect()
    }

    /// Every filtered row in display order, ignoring pagination
    #[cfg(test)]
    pub fn sorted_rows(&self) -> Vec<Row<'_>> {
        let records = self.model.pre_filtered_rows();
        self.order
            .iter()
            .map(|&index| Row {
                record: &records[index],
            })
            .collect()
    }

    /// Rows of the visible page
    pub fn rows(&self) -> Vec<Row<'_>> {
        let (start, end) = self.state.pagination.visible_range(self.order.len());
        let records = self.model.pre_filtered_rows();
        self.order[start..end]
            .iter()
            .map(|&index| Row {
                record: &records[index],
            })
            .collect()
    }

    pub fn total_row_count(&self) -> usize {
        self.model.pre_filtered_rows().len()
    }

    pub fn filtered_row_count(&self) -> usize {
        self.order.len()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.order.len(), self.state.pagination.page_size)
    }

    pub fn can_previous_page(&self) -> bool {
        self.state.pagination.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.state.pagination.page_index + 1 < self.page_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BuiltinRoster, InMemorySource};

    fn roster(page_size: usize) -> Table {
        Table::with_defaults(Box::new(BuiltinRoster::new()), page_size)
    }

    fn page_ids(table: &Table) -> Vec<u32> {
        table.rows().iter().map(|r| r.record.id).collect()
    }

    fn all_ages(table: &Table) -> Vec<f64> {
        table.sorted_rows().iter().map(|r| r.record.age).collect()
    }

    #[test]
    fn every_page_shows_its_slice() {
        for size in PAGE_SIZE_OPTIONS {
            let mut table = roster(size);
            let order: Vec<u32> = table.sorted_rows().iter().map(|r| r.record.id).collect();
            for page in 0..table.page_count() {
                table.dispatch(Action::SetPageIndex(page));
                let start = page * size;
                let expected = size.min(order.len() - start);
                assert_eq!(table.rows().len(), expected, "size {} page {}", size, page);
                assert_eq!(page_ids(&table), order[start..start + expected].to_vec());
            }
        }
    }

    #[test]
    fn age_sort_cycle_asc_desc_none() {
        let mut table = roster(5);

        table.dispatch(Action::ToggleSort(Field::Age));
        let ascending = all_ages(&table);
        assert!(ascending.windows(2).all(|w| w[0] <= w[1]));

        table.dispatch(Action::ToggleSort(Field::Age));
        let mut descending = all_ages(&table);
        descending.reverse();
        assert_eq!(ascending, descending);

        table.dispatch(Action::ToggleSort(Field::Age));
        assert_eq!(table.sorting(), None);
        let ids: Vec<u32> = table.sorted_rows().iter().map(|r| r.record.id).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn name_filter_rijwan() {
        let mut table = roster(5);
        table.dispatch(Action::SetFilter(Field::Name, "Rijwan".into()));
        let names: Vec<&str> = table.rows().iter().map(|r| r.record.name.as_str()).collect();
        assert_eq!(names, vec!["Rijwan Hossain", "Rijwan Haque", "MD. Rijwan"]);
        assert_eq!(table.page_count(), 1);
        assert_eq!(table.filtered_row_count(), 3);
    }

    #[test]
    fn age_filter_25() {
        let mut table = roster(10);
        table.dispatch(Action::SetFilter(Field::Age, "25".into()));
        assert_eq!(page_ids(&table), vec![2, 6, 10, 11, 14]);
    }

    #[test]
    fn page_size_three_last_page() {
        let mut table = roster(5);
        table.dispatch(Action::SetPageSize(3));
        assert_eq!(table.page_count(), 5);

        table.dispatch(Action::LastPage);
        assert_eq!(table.pagination().page_index, 4);
        assert_eq!(page_ids(&table), vec![13, 14, 15]);
    }

    #[test]
    fn boundary_queries_match_page_index() {
        let mut table = roster(3);
        for page in 0..table.page_count() {
            table.dispatch(Action::SetPageIndex(page));
            assert_eq!(!table.can_previous_page(), page == 0);
            assert_eq!(!table.can_next_page(), page == table.page_count() - 1);
        }
    }

    #[test]
    fn navigation_at_boundaries_is_a_no_op() {
        let mut table = roster(5);
        table.dispatch(Action::PreviousPage);
        assert_eq!(table.pagination().page_index, 0);

        table.dispatch(Action::LastPage);
        table.dispatch(Action::NextPage);
        assert_eq!(table.pagination().page_index, 2);
    }

    #[test]
    fn jump_to_page_converts_and_clamps() {
        let mut table = roster(5);
        table.dispatch(Action::JumpToPage("2".into()));
        assert_eq!(table.pagination().page_index, 1);

        table.dispatch(Action::JumpToPage("99".into()));
        assert_eq!(table.pagination().page_index, 2);

        table.dispatch(Action::JumpToPage("".into()));
        assert_eq!(table.pagination().page_index, 0);

        table.dispatch(Action::JumpToPage("3".into()));
        table.dispatch(Action::JumpToPage("x".into()));
        assert_eq!(table.pagination().page_index, 0);
    }

    #[test]
    fn empty_filter_result_keeps_one_page() {
        let mut table = roster(5);
        table.dispatch(Action::SetFilter(Field::Name, "zzz".into()));
        assert!(table.rows().is_empty());
        assert_eq!(table.page_count(), 1);
        assert!(!table.can_previous_page());
        assert!(!table.can_next_page());
        assert_eq!(table.header_group().len(), 3);
    }

    #[test]
    fn large_page_size_collapses_pagination() {
        let mut table = roster(5);
        table.dispatch(Action::LastPage);
        table.dispatch(Action::SetPageSize(20));
        assert_eq!(table.page_count(), 1);
        assert_eq!(table.pagination().page_index, 0);
        assert_eq!(table.rows().len(), 15);
    }

    #[test]
    fn off_list_page_size_is_accepted() {
        let mut table = roster(5);
        table.dispatch(Action::SetPageSize(7));
        assert_eq!(table.pagination().page_size, 7);
        assert_eq!(table.page_count(), 3);
    }

    #[test]
    fn header_group_reports_sort_and_filter() {
        let mut table = roster(5);
        table.dispatch(Action::ToggleSort(Field::Name));
        table.dispatch(Action::SetFilter(Field::Age, "25".into()));

        let headers = table.header_group();
        assert_eq!(headers[0].column.header, "Unique ID");
        assert_eq!(headers[1].sort, Some(SortDirection::Ascending));
        assert_eq!(headers[0].sort, None);
        assert!(headers[2].filter.is_some());
        assert!(headers.iter().all(|h| h.can_sort() && h.can_filter()));
    }

    #[test]
    fn name_sort_is_alphanumeric() {
        let mut table = roster(100);
        table.dispatch(Action::ToggleSort(Field::Name));
        let names: Vec<&str> = table.rows().iter().map(|r| r.record.name.as_str()).collect();
        assert_eq!(names[0], "Amirul Hossain");
        assert_eq!(names[1], "Amirul Islam Rana");
        assert_eq!(names[14], "Sohel Rana");
    }

    #[test]
    fn injected_source_replaces_builtin() {
        let source = InMemorySource::new(
            "pair",
            vec![Record::new(1, "Zed", 9.0), Record::new(2, "Amy", 3.0)],
        );
        let mut table = Table::with_defaults(Box::new(source), 5);
        assert_eq!(table.total_row_count(), 2);
        table.dispatch(Action::ToggleSort(Field::Name));
        assert_eq!(table.rows()[0].record.name, "Amy");
        assert_eq!(table.rows()[0].record.id, 2);
    }

    #[test]
    fn numeric_columns_can_sort_descending_first() {
        let mut table = Table::new(
            Box::new(BuiltinRoster::new()),
            roster_columns(true),
            TableState::with_page_size(5),
        );
        table.dispatch(Action::ToggleSort(Field::Age));
        assert_eq!(
            table.sorting().map(|s| s.direction),
            Some(SortDirection::Descending)
        );
        assert_eq!(page_ids(&table)[0], 9);

        table.dispatch(Action::ToggleSort(Field::Name));
        assert_eq!(
            table.sorting().map(|s| s.direction),
            Some(SortDirection::Ascending)
        );
    }
}
