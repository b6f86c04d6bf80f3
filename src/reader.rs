//! CSV file reading
//!
//! The document is read fully into memory and parsed in one call, so quoted
//! fields may span lines without any buffering protocol between reader and
//! parser.

use crate::csv::parse_document;
use crate::error::{CsvError, Result};
use crate::types::Record;
use std::fs;
use std::path::Path;

/// Read a CSV file and parse it into records.
///
/// The file's bytes are decoded as UTF-8 with undecodable sequences replaced
/// by U+FFFD, so a messy export never aborts the read. The only failure mode
/// is I/O.
///
/// # Examples
///
/// ```no_run
/// use rowscan::reader::read_document;
///
/// let records = read_document("imdb-movies-dataset.csv").unwrap();
/// for record in &records {
///     println!("{:?}", record);
/// }
/// ```
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let bytes = fs::read(path.as_ref())
        .map_err(|e| CsvError::ReadError(format!("Failed to read CSV file: {}", e)))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_document(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_plain_file() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Name,Age,City\nAlice,30,NYC\nBob,25,SF\n").unwrap();

        let records = read_document(file.path())?;
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], vec!["Name", "Age", "City"]);
        assert_eq!(records[2], vec!["Bob", "25", "SF"]);
        Ok(())
    }

    #[test]
    fn test_read_invalid_utf8_is_replaced() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"a,b\xFFc\n").unwrap();

        let records = read_document(file.path())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0][0], "a");
        assert!(records[0][1].contains('\u{FFFD}'));
        Ok(())
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_document("no_such_file.csv").unwrap_err();
        assert!(matches!(err, CsvError::ReadError(_)));
    }
}
