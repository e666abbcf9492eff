//! Column filters
//!
//! A filter is chosen by the column's [`ColumnKind`]: text columns match a
//! case-insensitive substring, numeric columns match an inclusive range.

use super::value::parse_float_prefix;
use super::{CellValue, ColumnKind};
use crate::data::Field;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Case-insensitive substring
    Text(String),
    /// Inclusive bounds; a missing bound is unbounded on that side
    Range { min: Option<f64>, max: Option<f64> },
}

impl FilterValue {
    /// Build a filter from what the user typed into a column's input
    ///
    /// Numeric input sets both bounds to the same value, so "25" matches
    /// exactly 25. Returns `None` when the input clears the filter.
    pub fn from_input(kind: ColumnKind, input: &str) -> Option<FilterValue> {
        if input.is_empty() {
            return None;
        }
        match kind {
            ColumnKind::Text => Some(FilterValue::Text(input.to_string())),
            ColumnKind::Numeric => {
                if input.trim().is_empty() {
                    return None;
                }
                let bound = parse_float_prefix(input);
                Some(FilterValue::Range {
                    min: bound,
                    max: bound,
                })
            }
        }
    }

    pub fn matches(&self, value: &CellValue) -> bool {
        match self {
            FilterValue::Text(needle) => value
                .to_string()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            FilterValue::Range { min, max } => {
                let Some(v) = value.as_number() else {
                    return false;
                };
                let mut lo = min.unwrap_or(f64::NEG_INFINITY);
                let mut hi = max.unwrap_or(f64::INFINITY);
                if lo > hi {
                    std::mem::swap(&mut lo, &mut hi);
                }
                lo <= v && v <= hi
            }
        }
    }

    /// Text to show in the column's input box
    pub fn input_text(&self) -> String {
        match self {
            FilterValue::Text(s) => s.clone(),
            FilterValue::Range { min, .. } => min.map(|m| m.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilter {
    pub field: Field,
    pub value: FilterValue,
}

/// Active filters, at most one per column, in the order they were first set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnFilters {
    filters: Vec<ColumnFilter>,
}

impl ColumnFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&FilterValue> {
        self.filters
            .iter()
            .find(|f| f.field == field)
            .map(|f| &f.value)
    }

    /// Set or clear the filter on `field`
    pub fn set(&mut self, field: Field, value: Option<FilterValue>) {
        match value {
            Some(value) => {
                if let Some(existing) = self.filters.iter_mut().find(|f| f.field == field) {
                    existing.value = value;
                } else {
                    self.filters.push(ColumnFilter { field, value });
                }
            }
            None => self.filters.retain(|f| f.field != field),
        }
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnFilter> {
        self.filters.iter()
    }
}
