//! CSV document parsing with RFC 4180-like behavior
//!
//! The parser is a single left-to-right scan over the full document text.
//! It never fails: every input string maps to some sequence of records, and
//! malformed content (short rows, an unterminated quote) is recovered
//! best-effort rather than rejected. Callers judge whether a record is
//! usable.

use crate::types::Record;
use std::mem;

/// Parse an entire CSV document into records.
///
/// Handles quoted fields containing commas and newlines, doubled-quote
/// escapes (`""` inside a quoted field is a literal `"`), and `\n`, `\r\n`
/// and lone `\r` row terminators interchangeably. A quote encountered
/// mid-field still enters quoted mode; once entered, quoted mode governs the
/// rest of the field until a closing quote.
///
/// A document ending cleanly on a row terminator produces no trailing blank
/// record. A document ending mid-field (or inside an unterminated quote)
/// flushes whatever has accumulated as the final record.
///
/// # Examples
///
/// ```
/// use rowscan::csv::parse_document;
///
/// let records = parse_document("Title,Year\n\"Alien, Covenant\",2017\n");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1], vec!["Alien, Covenant", "2017"]);
/// ```
pub fn parse_document(text: &str) -> Vec<Record> {
    let mut records: Vec<Record> = Vec::new();
    let mut record: Record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Doubled quote is a literal quote
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                // Newlines and commas inside quotes are data
                field.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => record.push(mem::take(&mut field)),
                '\n' | '\r' => {
                    // CRLF collapses to a single terminator
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    record.push(mem::take(&mut field));
                    records.push(mem::take(&mut record));
                }
                _ => field.push(ch),
            }
        }
    }

    // Flush trailing data when the document does not end on a terminator.
    // An unterminated quote always flushes, even when nothing accumulated.
    if in_quotes || !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}
