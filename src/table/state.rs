//! Table state and the actions that change it

use super::filter::ColumnFilters;
use super::pagination::PaginationState;
use super::sort::ColumnSort;
use crate::data::Field;

/// Everything the user can change about the table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    pub sorting: Option<ColumnSort>,
    pub filters: ColumnFilters,
    pub pagination: PaginationState,
}

impl TableState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            pagination: PaginationState::new(page_size),
            ..Self::default()
        }
    }
}

/// A discrete user intent, applied by [`super::TableModel::reduce`]
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Header click: advance the column's sort cycle
    ToggleSort(Field),
    /// Replace sorting outright (`None` = unsorted)
    SetSort(Option<ColumnSort>),
    /// Raw text typed into a column's filter input
    SetFilter(Field, String),
    ClearFilters,
    SetPageIndex(usize),
    /// Raw 1-based text from the page-jump input
    JumpToPage(String),
    SetPageSize(usize),
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
}

/// Convert page-jump input into a zero-based page index
///
/// Empty or non-integer input maps to page 0; "0" and negatives map to 0.
/// The result is clamped to the page count by the reducer.
pub fn parse_page_jump(input: &str) -> usize {
    match input.trim().parse::<i64>() {
        Ok(page) if page > 1 => usize::try_from(page - 1).unwrap_or(usize::MAX),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_jump_is_one_based() {
        assert_eq!(parse_page_jump("1"), 0);
        assert_eq!(parse_page_jump("3"), 2);
        assert_eq!(parse_page_jump(" 5 "), 4);
    }

    #[test]
    fn invalid_page_jump_goes_to_first_page() {
        assert_eq!(parse_page_jump(""), 0);
        assert_eq!(parse_page_jump("abc"), 0);
        assert_eq!(parse_page_jump("2.5"), 0);
        assert_eq!(parse_page_jump("0"), 0);
        assert_eq!(parse_page_jump("-4"), 0);
    }

    #[test]
    fn default_state_is_unsorted_first_page() {
        let state = TableState::default();
        assert_eq!(state.sorting, None);
        assert!(state.filters.is_empty());
        assert_eq!(state.pagination.page_index, 0);
        assert_eq!(state.pagination.page_size, 5);
    }
}
