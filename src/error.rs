//! Error types for rowscan

use thiserror::Error;

/// Errors raised by the I/O, header-resolution and value layers.
///
/// The document parser itself never errors: malformed input degrades to a
/// best-effort sequence of records. Everything that can fail lives around
/// it. A missing column ([`ColumnNotFound`](CsvError::ColumnNotFound)) is
/// deliberately distinct from a present-but-unparseable value
/// ([`ValueError`](CsvError::ValueError)) so callers can report the two
/// conditions separately.
#[derive(Error, Debug)]
pub enum CsvError {
    /// Failed to read input
    #[error("Read error: {0}")]
    ReadError(String),

    /// Failed to write output
    #[error("Write error: {0}")]
    WriteError(String),

    /// A named column is not present in the header
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// A field value could not be converted to the expected type
    #[error("Value error: {0}")]
    ValueError(String),

    /// The document contains no records at all
    #[error("document contains no records")]
    EmptyDocument,
}

/// Convenience result type used throughout the crate
pub type Result<T> = std::result::Result<T, CsvError>;
