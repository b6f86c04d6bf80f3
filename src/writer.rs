//! CSV file writing

use crate::csv::encode_record;
use crate::error::{CsvError, Result};
use crate::types::FieldValue;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffered CSV file writer.
///
/// Writes records row by row through the crate encoder, quoting only the
/// fields that need it. Rows are terminated with `\n`.
///
/// # Examples
///
/// ```no_run
/// use rowscan::writer::CsvWriter;
///
/// let mut writer = CsvWriter::new("output.csv").unwrap();
/// writer.write_record(["Title", "Year"]).unwrap();
/// writer.write_record(["Alien, Covenant", "2017"]).unwrap();
/// writer.save().unwrap();
/// ```
pub struct CsvWriter {
    writer: BufWriter<File>,
    row_count: u64,
    buffer: String,
}

impl CsvWriter {
    /// Create a writer for the given path, truncating any existing file
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref())
            .map_err(|e| CsvError::WriteError(format!("Failed to create CSV file: {}", e)))?;

        Ok(CsvWriter {
            writer: BufWriter::new(file),
            row_count: 0,
            buffer: String::with_capacity(1024),
        })
    }

    /// Write one record of string fields
    pub fn write_record<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Reuse the encode buffer across rows
        self.buffer.clear();
        let fields: Vec<String> = fields.into_iter().map(|s| s.as_ref().to_string()).collect();
        encode_record(&fields, &mut self.buffer);
        self.buffer.push('\n');

        self.writer
            .write_all(self.buffer.as_bytes())
            .map_err(|e| CsvError::WriteError(format!("Failed to write to file: {}", e)))?;

        self.row_count += 1;
        Ok(())
    }

    /// Write one record of typed values, stringified first
    pub fn write_record_typed(&mut self, values: &[FieldValue]) -> Result<()> {
        let strings: Vec<String> = values.iter().map(|v| v.as_string()).collect();
        self.write_record(strings)
    }

    /// Number of records written so far
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Flush and close the file. Consumes the writer.
    pub fn save(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| CsvError::WriteError(format!("Failed to flush file: {}", e)))
    }
}
