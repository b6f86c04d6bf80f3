//! Single-pass reducers over a [`Table`]
//!
//! Each reducer resolves its column index once and then makes one pass over
//! the data rows. They are lenient by policy: rows that are too short, empty
//! values and unparseable numbers are skipped, never fatal. Only an
//! unresolvable column name is an error.

use crate::error::Result;
use crate::table::Table;
use crate::types::{FieldType, FieldValue, Record};
use indexmap::IndexMap;
use tracing::debug;

/// Count occurrences of each distinct trimmed value in a column.
///
/// Empty values are not counted. The map preserves first-seen order.
pub fn value_counts(table: &Table, column: &str) -> Result<IndexMap<String, u64>> {
    let index = table.column(column)?;
    let mut counts: IndexMap<String, u64> = IndexMap::new();

    for row in table.rows() {
        if let Some(value) = table.field(row, index) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                *counts.entry(trimmed.to_string()).or_insert(0) += 1;
            }
        }
    }

    Ok(counts)
}

/// Count occurrences of each comma-separated token in a column.
///
/// A field listing several values (`"Comedy, Drama"`) increments every one
/// of them. Tokens are trimmed; empty tokens are skipped.
pub fn multi_value_counts(table: &Table, column: &str) -> Result<IndexMap<String, u64>> {
    let index = table.column(column)?;
    let mut counts: IndexMap<String, u64> = IndexMap::new();

    for row in table.rows() {
        if let Some(value) = table.field(row, index) {
            for token in value.split(',') {
                let token = token.trim();
                if !token.is_empty() {
                    *counts.entry(token.to_string()).or_insert(0) += 1;
                }
            }
        }
    }

    Ok(counts)
}

/// Mean of a numeric column over the rows whose filter column matches.
///
/// The filter match trims whitespace and ignores case. Rows that are short,
/// have an empty value, or fail numeric parsing are skipped. Returns
/// `Ok(None)` when no row contributes a usable value.
pub fn mean_where(
    table: &Table,
    value_column: &str,
    filter_column: &str,
    filter_value: &str,
) -> Result<Option<f64>> {
    let value_index = table.column(value_column)?;
    let filter_index = table.column(filter_column)?;
    let target = filter_value.trim().to_lowercase();

    let mut total = 0.0;
    let mut count = 0u64;

    for row in table.rows() {
        let matches = table
            .field(row, filter_index)
            .map(|v| v.trim().to_lowercase() == target)
            .unwrap_or(false);
        if !matches {
            continue;
        }

        let raw = match table.field(row, value_index).map(str::trim) {
            Some(v) if !v.is_empty() => v,
            _ => continue,
        };
        match raw.parse::<f64>() {
            Ok(value) => {
                total += value;
                count += 1;
            }
            Err(_) => {
                debug!(
                    "Failed to parse '{}' = '{}' as float, skipping row",
                    value_column, raw
                );
            }
        }
    }

    if count == 0 {
        Ok(None)
    } else {
        Ok(Some(total / count as f64))
    }
}

/// Word-frequency table over a text column.
///
/// Text is lowercased and split on non-alphanumeric characters; tokens
/// shorter than `min_len` are dropped. The map preserves first-seen order.
pub fn word_frequencies(
    table: &Table,
    column: &str,
    min_len: usize,
) -> Result<IndexMap<String, u64>> {
    let index = table.column(column)?;
    let mut counts: IndexMap<String, u64> = IndexMap::new();

    for row in table.rows() {
        if let Some(text) = table.field(row, index) {
            for word in text.to_lowercase().split(|c: char| !c.is_alphanumeric()) {
                if word.len() >= min_len {
                    *counts.entry(word.to_string()).or_insert(0) += 1;
                }
            }
        }
    }

    Ok(counts)
}

/// The `n` highest counts, descending. Ties keep first-seen order.
pub fn top_n(counts: &IndexMap<String, u64>, n: usize) -> Vec<(String, u64)> {
    let mut items: Vec<(String, u64)> = counts
        .iter()
        .map(|(value, count)| (value.clone(), *count))
        .collect();
    // Stable sort preserves insertion order between equal counts
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items.truncate(n);
    items
}

/// Data rows stably sorted by a column's string value.
///
/// The sort key trims whitespace and ignores case; rows too short to reach
/// the column sort with an empty key, placing them first.
pub fn sort_by_column(table: &Table, column: &str) -> Result<Vec<Record>> {
    let index = table.column(column)?;
    let mut rows: Vec<Record> = table.rows().to_vec();
    rows.sort_by_cached_key(|row| {
        row.get(index)
            .map(|v| v.trim().to_lowercase())
            .unwrap_or_default()
    });
    Ok(rows)
}

/// Infer a [`FieldType`] for every header column.
///
/// Each usable value contributes its inferred kind; kinds are combined with
/// [`FieldType::unify`], so an integer column with one decimal value widens
/// to float and any mix with text collapses to text. A column with no data
/// at all is text.
pub fn infer_column_types(table: &Table) -> Vec<FieldType> {
    let width = table.header().len();
    let mut inferred: Vec<Option<FieldType>> = vec![None; width];

    for row in table.rows() {
        for (slot, raw) in inferred.iter_mut().zip(row.iter()) {
            let kind = FieldValue::infer(raw).kind();
            *slot = Some(match *slot {
                Some(current) => current.unify(kind),
                None => kind,
            });
        }
    }

    inferred
        .into_iter()
        .map(|slot| slot.unwrap_or(FieldType::Text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVIES: &str = "\
Title,Genre,Rating,Certificate,Director,Review
Jaws,\"Thriller, Adventure\",8.1,PG,Steven Spielberg,A shark terrorises the town
Heat,\"Crime, Drama\",8.3,R,Michael Mann,The heist the heist the crew
Alien,\"Horror, Sci-Fi\",8.5,R,Ridley Scott,In space no one can hear
Short
Clue,Comedy,7.3,PG,Jonathan Lynn,
";

    fn table() -> Table {
        Table::from_text(MOVIES).unwrap()
    }

    #[test]
    fn test_value_counts() {
        let counts = value_counts(&table(), "certificate").unwrap();
        assert_eq!(counts.get("PG"), Some(&2));
        assert_eq!(counts.get("R"), Some(&2));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_multi_value_counts_splits_genres() {
        let counts = multi_value_counts(&table(), "genre").unwrap();
        assert_eq!(counts.get("Thriller"), Some(&1));
        assert_eq!(counts.get("Crime"), Some(&1));
        assert_eq!(counts.get("Drama"), Some(&1));
        assert_eq!(counts.get("Comedy"), Some(&1));
        // Seven distinct genres across the five rows
        assert_eq!(counts.len(), 7);
    }

    #[test]
    fn test_mean_where_filters_case_insensitively() {
        let mean = mean_where(&table(), "rating", "certificate", "r").unwrap();
        assert_eq!(mean, Some(8.4));
    }

    #[test]
    fn test_mean_where_no_matches() {
        let mean = mean_where(&table(), "rating", "certificate", "NC-17").unwrap();
        assert_eq!(mean, None);
    }

    #[test]
    fn test_mean_where_skips_unparseable() {
        let text = "Rating,Certificate\n8.0,R\nN/A,R\n9.0,R\n";
        let table = Table::from_text(text).unwrap();
        let mean = mean_where(&table, "rating", "certificate", "R").unwrap();
        assert_eq!(mean, Some(8.5));
    }

    #[test]
    fn test_missing_column_is_reported() {
        let err = value_counts(&table(), "Box Office").unwrap_err();
        assert!(matches!(
            err,
            crate::error::CsvError::ColumnNotFound(name) if name == "Box Office"
        ));
    }

    #[test]
    fn test_word_frequencies() {
        let counts = word_frequencies(&table(), "review", 3).unwrap();
        assert_eq!(counts.get("the"), Some(&4));
        assert_eq!(counts.get("heist"), Some(&2));
        // Shorter than min_len
        assert_eq!(counts.get("no"), None);
    }

    #[test]
    fn test_top_n_orders_descending() {
        let counts = word_frequencies(&table(), "review", 3).unwrap();
        let top = top_n(&counts, 2);
        assert_eq!(top[0].0, "the");
        assert_eq!(top[1].0, "heist");
    }

    #[test]
    fn test_top_n_ties_keep_first_seen_order() {
        let mut counts = IndexMap::new();
        counts.insert("b".to_string(), 2u64);
        counts.insert("a".to_string(), 2u64);
        counts.insert("c".to_string(), 5u64);
        assert_eq!(
            top_n(&counts, 3),
            vec![
                ("c".to_string(), 5),
                ("b".to_string(), 2),
                ("a".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_sort_by_column_is_case_insensitive_and_stable() {
        let sorted = sort_by_column(&table(), "director").unwrap();
        // Short row has no director and sorts first
        assert_eq!(sorted[0][0], "Short");
        assert_eq!(sorted[1][0], "Clue");
        assert_eq!(sorted[2][0], "Heat");
        assert_eq!(sorted[3][0], "Alien");
        assert_eq!(sorted[4][0], "Jaws");
    }

    #[test]
    fn test_infer_column_types() {
        let text = "Title,Year,Rating,Votes\nJaws,1975,8.1,100\nHeat,1995,8.3,long\n";
        let table = Table::from_text(text).unwrap();
        assert_eq!(
            infer_column_types(&table),
            vec![
                FieldType::Text,
                FieldType::Int,
                FieldType::Float,
                FieldType::Text
            ]
        );
    }

    #[test]
    fn test_infer_column_types_empty_table() {
        let table = Table::from_text("a,b\n").unwrap();
        assert_eq!(
            infer_column_types(&table),
            vec![FieldType::Text, FieldType::Text]
        );
    }
}
