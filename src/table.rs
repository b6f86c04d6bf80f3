//! Header-resolved view over parsed records

use crate::csv::parse_document;
use crate::error::{CsvError, Result};
use crate::reader::read_document;
use crate::types::Record;
use indexmap::IndexMap;
use std::path::Path;

/// A parsed document split into a header and data rows, with column lookup
/// by name.
///
/// Column names are resolved case-insensitively after trimming, through a
/// name-to-position map built once at construction. When two header cells
/// normalize to the same name, the leftmost position wins.
///
/// Short rows are kept exactly as parsed: a row shorter than the header has
/// absent trailing fields, which surface as `None` from [`Table::field`].
/// Nothing is zero-padded or dropped.
///
/// # Examples
///
/// ```
/// use rowscan::table::Table;
///
/// let table = Table::from_text("Title,Rating\nJaws,8.1\n").unwrap();
/// let rating = table.column("rating").unwrap();
/// assert_eq!(table.field(&table.rows()[0], rating), Some("8.1"));
/// ```
#[derive(Debug)]
pub struct Table {
    header: Record,
    rows: Vec<Record>,
    columns: IndexMap<String, usize>,
}

impl Table {
    /// Read and parse a CSV file, treating the first record as the header
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Table> {
        Table::from_records(read_document(path)?)
    }

    /// Parse CSV text, treating the first record as the header
    pub fn from_text(text: &str) -> Result<Table> {
        Table::from_records(parse_document(text))
    }

    /// Build a table from already-parsed records.
    ///
    /// Returns [`CsvError::EmptyDocument`] when there are no records at all
    /// (not even a header).
    pub fn from_records(mut records: Vec<Record>) -> Result<Table> {
        if records.is_empty() {
            return Err(CsvError::EmptyDocument);
        }
        let header = records.remove(0);

        let mut columns = IndexMap::new();
        for (index, name) in header.iter().enumerate() {
            // First occurrence wins for duplicate normalized names
            columns.entry(normalize(name)).or_insert(index);
        }

        Ok(Table {
            header,
            rows: records,
            columns,
        })
    }

    /// The header record, verbatim
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The data rows (everything after the header)
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolve a column name to its position.
    ///
    /// Matching trims whitespace and ignores case, so `"Rating"`,
    /// `" rating "` and `"RATING"` all resolve to the same column.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.columns
            .get(&normalize(name))
            .copied()
            .ok_or_else(|| CsvError::ColumnNotFound(name.to_string()))
    }

    /// Fetch a field by position, `None` when the row is too short
    pub fn field<'a>(&self, row: &'a Record, column: usize) -> Option<&'a str> {
        row.get(column).map(String::as_str)
    }

    /// Fetch a field and parse it as a number.
    ///
    /// Unlike the lenient reducers in [`analysis`](crate::analysis), this
    /// accessor reports an absent, empty or non-numeric value as
    /// [`CsvError::ValueError`].
    pub fn numeric_field(&self, row: &Record, column: usize) -> Result<f64> {
        let name = self
            .header
            .get(column)
            .map(String::as_str)
            .unwrap_or("<unknown>");
        let raw = self
            .field(row, column)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CsvError::ValueError(format!("column '{}' has no value", name)))?;

        raw.parse::<f64>().map_err(|_| {
            CsvError::ValueError(format!("column '{}': '{}' is not a number", name, raw))
        })
    }
}

/// Normalize a column name for lookup
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
