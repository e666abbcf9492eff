//! Row model derivation and the state reducer
//!
//! The pipeline is fixed: filter the source records, stable-sort what is
//! left, then slice out the visible page. Sorting and filtering are
//! recomputed from scratch; the record sets this tool targets are small.

use super::filter::{ColumnFilters, FilterValue};
use super::pagination::page_count;
use super::sort;
use super::state::{parse_page_jump, Action, TableState};
use super::ColumnDef;
use crate::data::{DataSource, Field, Record};

/// Data source plus column definitions; holds no mutable state
pub struct TableModel {
    source: Box<dyn DataSource>,
    columns: Vec<ColumnDef>,
}

impl TableModel {
    pub fn new(source: Box<dyn DataSource>, columns: Vec<ColumnDef>) -> Self {
        Self { source, columns }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn column(&self, field: Field) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.accessor == field)
    }

    /// All records before any filter is applied
    pub fn pre_filtered_rows(&self) -> &[Record] {
        self.source.records()
    }

    /// Indices of records passing every active filter, in source order
    pub fn filtered_indices(&self, filters: &ColumnFilters) -> Vec<usize> {
        let records = self.source.records();
        let active: Vec<(&ColumnDef, &FilterValue)> = filters
            .iter()
            .filter_map(|f| self.column(f.field).map(|col| (col, &f.value)))
            .collect();

        (0..records.len())
            .filter(|&i| {
                active
                    .iter()
                    .all(|(col, value)| value.matches(&col.value(&records[i])))
            })
            .collect()
    }

    /// Filtered indices in display order
    ///
    /// Ties keep source order regardless of direction.
    pub fn sorted_indices(&self, state: &TableState) -> Vec<usize> {
        let indices = self.filtered_indices(&state.filters);
        let Some(sorting) = state.sorting else {
            return indices;
        };
        let Some(column) = self.column(sorting.field) else {
            return indices;
        };

        let records = self.source.records();
        let mut keyed: Vec<_> = indices
            .into_iter()
            .map(|i| (i, column.value(&records[i])))
            .collect();
        keyed.sort_by(|(_, a), (_, b)| sorting.direction.apply(a.compare(b)));
        keyed.into_iter().map(|(i, _)| i).collect()
    }

    /// Apply one action to `state`, returning the next state
    ///
    /// Never fails: out-of-range pages clamp, actions on columns that cannot
    /// sort or filter are ignored. Any change to sorting or filters resets
    /// the page index to 0.
    pub fn reduce(&self, state: &TableState, action: Action) -> TableState {
        let mut next = state.clone();
        let row_count = || self.filtered_indices(&state.filters).len();

        match action {
            Action::ToggleSort(field) => match self.column(field) {
                Some(col) if col.sortable => {
                    next.sorting = sort::toggle(state.sorting, field, col.sort_desc_first);
                }
                _ => tracing::debug!("Ignoring sort toggle on non-sortable column {}", field),
            },
            Action::SetSort(sorting) => {
                let allowed = sorting.map_or(true, |s| {
                    self.column(s.field).is_some_and(|col| col.sortable)
                });
                if allowed {
                    next.sorting = sorting;
                } else {
                    tracing::debug!("Ignoring sort on non-sortable column");
                }
            }
            Action::SetFilter(field, input) => match self.column(field) {
                Some(col) if col.filterable => {
                    next.filters
                        .set(field, FilterValue::from_input(col.kind, &input));
                }
                _ => tracing::debug!("Ignoring filter on non-filterable column {}", field),
            },
            Action::ClearFilters => next.filters.clear(),
            Action::SetPageIndex(index) => {
                next.pagination = state.pagination.with_page_index(index, row_count());
            }
            Action::JumpToPage(input) => {
                let index = parse_page_jump(&input);
                next.pagination = state.pagination.with_page_index(index, row_count());
            }
            Action::SetPageSize(size) => {
                next.pagination = state.pagination.with_page_size(size, row_count());
            }
            Action::FirstPage => {
                next.pagination = state.pagination.with_page_index(0, row_count());
            }
            Action::PreviousPage => {
                let index = state.pagination.page_index.saturating_sub(1);
                next.pagination = state.pagination.with_page_index(index, row_count());
            }
            Action::NextPage => {
                let index = state.pagination.page_index.saturating_add(1);
                next.pagination = state.pagination.with_page_index(index, row_count());
            }
            Action::LastPage => {
                let last = page_count(row_count(), state.pagination.page_size) - 1;
                next.pagination = state.pagination.with_page_index(last, row_count());
            }
        }

        if next.sorting != state.sorting || next.filters != state.filters {
            next.pagination.page_index = 0;
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BuiltinRoster;
    use crate::table::{default_columns, SortDirection};

    fn model() -> TableModel {
        TableModel::new(Box::new(BuiltinRoster::new()), default_columns())
    }

    fn ids(model: &TableModel, indices: &[usize]) -> Vec<u32> {
        indices
            .iter()
            .map(|&i| model.pre_filtered_rows()[i].id)
            .collect()
    }

    #[test]
    fn filter_change_resets_page() {
        let model = model();
        let mut state = TableState::default();
        state = model.reduce(&state, Action::LastPage);
        assert_eq!(state.pagination.page_index, 2);

        state = model.reduce(&state, Action::SetFilter(Field::Name, "a".into()));
        assert_eq!(state.pagination.page_index, 0);
    }

    #[test]
    fn sort_change_resets_page() {
        let model = model();
        let state = model.reduce(&TableState::default(), Action::NextPage);
        assert_eq!(state.pagination.page_index, 1);
        let state = model.reduce(&state, Action::ToggleSort(Field::Age));
        assert_eq!(state.pagination.page_index, 0);
    }

    #[test]
    fn descending_keeps_ties_in_source_order() {
        let model = model();
        let mut state = TableState::default();
        state.sorting = Some(sort::ColumnSort::new(Field::Age, SortDirection::Descending));
        let order = ids(&model, &model.sorted_indices(&state));
        // Ages 25: ids 2, 6, 10, 11, 14 stay in source order before the 21-year-old
        assert_eq!(&order[order.len() - 7..], &[13, 2, 6, 10, 11, 14, 7]);
    }

    #[test]
    fn combined_filters_intersect() {
        let model = model();
        let mut state = model.reduce(
            &TableState::default(),
            Action::SetFilter(Field::Name, "hossain".into()),
        );
        state = model.reduce(&state, Action::SetFilter(Field::Age, "25".into()));
        assert_eq!(ids(&model, &model.sorted_indices(&state)), vec![11]);
    }

    #[test]
    fn non_sortable_column_ignores_toggle() {
        let columns = default_columns()
            .into_iter()
            .map(|c| if c.accessor == Field::Name { c.sortable(false) } else { c })
            .collect();
        let model = TableModel::new(Box::new(BuiltinRoster::new()), columns);
        let state = model.reduce(&TableState::default(), Action::ToggleSort(Field::Name));
        assert_eq!(state.sorting, None);
    }

    #[test]
    fn non_filterable_column_ignores_filter() {
        let columns = default_columns()
            .into_iter()
            .map(|c| if c.accessor == Field::Id { c.filterable(false) } else { c })
            .collect();
        let model = TableModel::new(Box::new(BuiltinRoster::new()), columns);
        let state = model.reduce(&TableState::default(), Action::SetFilter(Field::Id, "3".into()));
        assert!(state.filters.is_empty());
    }

    #[test]
    fn reduce_does_not_mutate_input_state() {
        let model = model();
        let before = TableState::default();
        let after = model.reduce(&before, Action::NextPage);
        assert_eq!(before.pagination.page_index, 0);
        assert_eq!(after.pagination.page_index, 1);
    }
}
