//! JSON dataset loading
//!
//! Parses a JSON array of `{ "id", "name", "age" }` objects into records.

use super::error::{DataError, DataResult};
use super::Record;
use std::path::{Path, PathBuf};

/// Records loaded from a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    records: Vec<Record>,
}

impl JsonFileSource {
    /// Read and validate the file at `path`
    pub fn load(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path)?;
        let records = parse_records(&content)?;

        tracing::debug!(
            "Loaded {} records from {}",
            records.len(),
            path.display()
        );

        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl super::DataSource for JsonFileSource {
    fn name(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dataset")
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}

/// Parse JSON content into records
///
/// Ages must be finite and non-negative; names must not be blank.
pub fn parse_records(json: &str) -> DataResult<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(json)?;

    for (index, record) in records.iter().enumerate() {
        if !record.age.is_finite() || record.age < 0.0 {
            return Err(DataError::InvalidRecord {
                index,
                reason: format!("age must be a non-negative number, got {}", record.age),
            });
        }
        if record.name.trim().is_empty() {
            return Err(DataError::InvalidRecord {
                index,
                reason: "name is empty".to_string(),
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSource;
    use std::io::Write;

    #[test]
    fn parses_array_of_records() {
        let records =
            parse_records(r#"[{"id": 1, "name": "Ada", "age": 36}, {"id": 2, "name": "Lin", "age": 27.5}]"#)
                .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Lin");
        assert_eq!(records[1].age, 27.5);
    }

    #[test]
    fn rejects_negative_age() {
        let err = parse_records(r#"[{"id": 1, "name": "Ada", "age": -1}]"#).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn rejects_blank_name() {
        let err = parse_records(r#"[{"id": 1, "name": "Ada", "age": 3}, {"id": 2, "name": "  ", "age": 3}]"#)
            .unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = parse_records("[{").unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }

    #[test]
    fn load_from_file_uses_stem_as_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("people.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"[{{"id": 7, "name": "Tess", "age": 19}}]"#).unwrap();

        let source = JsonFileSource::load(&path).unwrap();
        assert_eq!(source.name(), "people");
        assert_eq!(source.records()[0].id, 7);
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = JsonFileSource::load("/nonexistent/roster.json").unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }
}
