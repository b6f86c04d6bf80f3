//! # rowscan
//!
//! Lenient single-pass CSV record parsing with typed field inference and
//! dataset analysis helpers.
//!
//! The core is [`csv::parse_document`]: a character-level scan that turns
//! the full text of a CSV document into records (rows of field strings). It
//! handles quoted fields with embedded commas and newlines, doubled-quote
//! escaping, and `\n` / `\r\n` / `\r` row terminators, and it never fails:
//! malformed input degrades to a best-effort record sequence instead of an
//! error.
//!
//! Around the parser:
//!
//! - [`reader`] / [`writer`]: file I/O with lossy UTF-8 decoding and
//!   quote-as-needed encoding
//! - [`table`]: header resolution, column lookup by normalized name
//! - [`types`]: typed field values with an ordered inference chain
//! - [`analysis`]: single-pass reducers (counts, filtered means, word
//!   frequencies, sorting, column type inference)
//!
//! # Examples
//!
//! ```no_run
//! use rowscan::{analysis, Table};
//!
//! let table = Table::open("imdb-movies-dataset.csv").unwrap();
//! let genres = analysis::multi_value_counts(&table, "Genre").unwrap();
//! for (genre, count) in &genres {
//!     println!("{}: {}", genre, count);
//! }
//! ```

pub mod analysis;
pub mod csv;
pub mod error;
pub mod reader;
pub mod table;
pub mod types;
pub mod writer;

pub use csv::{encode_record, parse_document};
pub use error::{CsvError, Result};
pub use reader::read_document;
pub use table::Table;
pub use types::{FieldType, FieldValue, Record};
pub use writer::CsvWriter;
