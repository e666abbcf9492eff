//! Sort state and the header toggle cycle

use crate::data::Field;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator glyph
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction '{}' (expected asc or desc)", other)),
        }
    }
}

/// The single sorted column, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSort {
    pub field: Field,
    pub direction: SortDirection,
}

impl ColumnSort {
    pub fn new(field: Field, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Next state of the toggle cycle for one column
///
/// none → first → opposite of first → none, where `first` is ascending
/// unless the column starts descending.
pub fn next_direction(current: Option<SortDirection>, desc_first: bool) -> Option<SortDirection> {
    let first = if desc_first {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    match current {
        None => Some(first),
        Some(dir) if dir == first => Some(first.reverse()),
        Some(_) => None,
    }
}

/// Toggle sorting on `field`, replacing any sort on another column
pub fn toggle(sorting: Option<ColumnSort>, field: Field, desc_first: bool) -> Option<ColumnSort> {
    let current = sorting
        .filter(|s| s.field == field)
        .map(|s| s.direction);
    next_direction(current, desc_first).map(|direction| ColumnSort::new(field, direction))
}
