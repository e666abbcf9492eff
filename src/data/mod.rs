//! Data sources for the table
//!
//! The table never owns a literal dataset. It is handed a [`DataSource`],
//! either the built-in roster or records loaded from a JSON file.

mod error;
mod json;

pub use json::JsonFileSource;

use crate::table::CellValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single person in the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub age: f64,
}

impl Record {
    pub fn new(id: u32, name: impl Into<String>, age: f64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Read the value behind an accessor key
    pub fn value(&self, field: Field) -> CellValue {
        match field {
            Field::Id => CellValue::Number(f64::from(self.id)),
            Field::Name => CellValue::Text(self.name.clone()),
            Field::Age => CellValue::Number(self.age),
        }
    }
}

/// Accessor key: which record field a column reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Age,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Age => "age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Field::Id),
            "name" => Ok(Field::Name),
            "age" => Ok(Field::Age),
            other => Err(format!("unknown column '{}' (expected id, name or age)", other)),
        }
    }
}

/// An immutable, explicitly owned record set
///
/// Implementations must return the same slice for the lifetime of the value.
pub trait DataSource {
    /// Short label shown in the title bar
    fn name(&self) -> &str;

    /// All records in their original order
    fn records(&self) -> &[Record];
}

/// The fifteen-person roster bundled with the binary
#[derive(Debug, Clone)]
pub struct BuiltinRoster {
    records: Vec<Record>,
}

impl BuiltinRoster {
    pub fn new() -> Self {
        let records = vec![
            Record::new(1, "Rijwan Hossain", 30.0),
            Record::new(2, "Roktim Raj", 25.0),
            Record::new(3, "Maryam Islam", 28.0),
            Record::new(4, "Rijwan Haque", 42.0),
            Record::new(5, "Roktim Khan", 27.5),
            Record::new(6, "Maryam Akter", 25.0),
            Record::new(7, "MD. Rijwan", 21.0),
            Record::new(8, "Sohel Rana", 35.0),
            Record::new(9, "Amirul Islam Rana", 45.0),
            Record::new(10, "Lisa Mone", 25.0),
            Record::new(11, "Amirul Hossain", 25.0),
            Record::new(12, "MST Maryam Khatun", 28.0),
            Record::new(13, "MDR Hossain", 26.0),
            Record::new(14, "Azman", 25.0),
            Record::new(15, "Monirul Alam", 35.0),
        ];
        Self { records }
    }
}

impl Default for BuiltinRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for BuiltinRoster {
    fn name(&self) -> &str {
        "roster"
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}

/// Records supplied directly by a test
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    name: String,
    records: Vec<Record>,
}

#[cfg(test)]
impl InMemorySource {
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

#[cfg(test)]
impl DataSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_roster_has_fifteen_sequential_ids() {
        let roster = BuiltinRoster::new();
        let ids: Vec<u32> = roster.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn record_value_by_field() {
        let record = Record::new(5, "Roktim Khan", 27.5);
        assert_eq!(record.value(Field::Id), CellValue::Number(5.0));
        assert_eq!(record.value(Field::Name), CellValue::Text("Roktim Khan".into()));
        assert_eq!(record.value(Field::Age), CellValue::Number(27.5));
    }

    #[test]
    fn field_parses_case_insensitively() {
        assert_eq!("AGE".parse::<Field>(), Ok(Field::Age));
        assert_eq!(" name ".parse::<Field>(), Ok(Field::Name));
        assert!("salary".parse::<Field>().is_err());
    }
}
