//! Column definitions

use super::CellValue;
use crate::data::{Field, Record};

/// Semantic type of a column; decides the filter input and filter predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// Formats a cell value for display
pub type CellFormatter = fn(&CellValue) -> String;

/// Declarative description of one table column
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub header: String,
    pub accessor: Field,
    pub kind: ColumnKind,
    /// Custom cell renderer; `None` displays the raw value
    pub cell: Option<CellFormatter>,
    pub sortable: bool,
    pub filterable: bool,
    /// Start the sort cycle at descending instead of ascending
    pub sort_desc_first: bool,
}

impl ColumnDef {
    pub fn new(header: impl Into<String>, accessor: Field, kind: ColumnKind) -> Self {
        Self {
            header: header.into(),
            accessor,
            kind,
            cell: None,
            sortable: true,
            filterable: true,
            sort_desc_first: false,
        }
    }

    pub fn with_cell(mut self, formatter: CellFormatter) -> Self {
        self.cell = Some(formatter);
        self
    }

    #[cfg(test)]
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    #[cfg(test)]
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn desc_first(mut self, desc_first: bool) -> Self {
        self.sort_desc_first = desc_first;
        self
    }

    /// Raw value of this column for a record
    pub fn value(&self, record: &Record) -> CellValue {
        record.value(self.accessor)
    }

    /// Display text of this column for a record
    pub fn render(&self, record: &Record) -> String {
        let value = self.value(record);
        match self.cell {
            Some(format) => format(&value),
            None => value.to_string(),
        }
    }
}

fn format_years(value: &CellValue) -> String {
    format!("{} years", value)
}

/// The three roster columns: Unique ID, Name, Age
pub fn default_columns() -> Vec<ColumnDef> {
    roster_columns(false)
}

/// Roster columns; numeric ones may start their sort cycle at descending
pub fn roster_columns(numeric_desc_first: bool) -> Vec<ColumnDef> {
    let numeric = |header: &str, field: Field| {
        ColumnDef::new(header, field, ColumnKind::Numeric).desc_first(numeric_desc_first)
    };
    vec![
        numeric("Unique ID", Field::Id),
        ColumnDef::new("Name", Field::Name, ColumnKind::Text),
        numeric("Age", Field::Age).with_cell(format_years),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_cells_carry_years_suffix() {
        let columns = default_columns();
        let record = Record::new(5, "Roktim Khan", 27.5);
        assert_eq!(columns[2].render(&record), "27.5 years");
        assert_eq!(columns[2].render(&Record::new(1, "A", 30.0)), "30 years");
    }

    #[test]
    fn plain_columns_render_raw_values() {
        let columns = default_columns();
        let record = Record::new(14, "Azman", 25.0);
        assert_eq!(columns[0].render(&record), "14");
        assert_eq!(columns[1].render(&record), "Azman");
    }

    #[test]
    fn default_columns_kinds() {
        let kinds: Vec<ColumnKind> = default_columns().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ColumnKind::Numeric, ColumnKind::Text, ColumnKind::Numeric]
        );
    }

    #[test]
    fn desc_first_applies_to_numeric_columns_only() {
        let flags: Vec<bool> = roster_columns(true).iter().map(|c| c.sort_desc_first).collect();
        assert_eq!(flags, vec![true, false, true]);
        assert!(default_columns().iter().all(|c| !c.sort_desc_first));
    }
}
