//! Record and typed field value definitions

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One logical row of a document: an ordered sequence of field strings.
///
/// Field count may vary row to row; a row shorter than the header simply has
/// absent trailing fields.
pub type Record = Vec<String>;

/// A field value tagged with its inferred type.
///
/// [`FieldValue::infer`] replaces implicit coercion chains with an explicit
/// ordered list of attempts: empty, then integer, then float, then text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldValue {
    /// Empty field (after trimming)
    Empty,
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
    /// Anything that is not numeric
    Text(String),
}

impl FieldValue {
    /// Infer the typed value of a raw field.
    ///
    /// The raw string is trimmed first. Parsers are attempted in priority
    /// order: an empty string is [`Empty`](FieldValue::Empty), then `i64`,
    /// then `f64`, and anything else is kept as text.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowscan::types::FieldValue;
    ///
    /// assert_eq!(FieldValue::infer(" 1994 "), FieldValue::Int(1994));
    /// assert_eq!(FieldValue::infer("8.7"), FieldValue::Float(8.7));
    /// assert_eq!(FieldValue::infer("PG-13"), FieldValue::Text("PG-13".to_string()));
    /// assert_eq!(FieldValue::infer("  "), FieldValue::Empty);
    /// ```
    pub fn infer(raw: &str) -> FieldValue {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Empty;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return FieldValue::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return FieldValue::Float(f);
        }
        FieldValue::Text(trimmed.to_string())
    }

    /// Convert the value to a string
    pub fn as_string(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    /// Try to convert to integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            FieldValue::Float(f) => Some(*f as i64),
            FieldValue::Text(s) => s.parse().ok(),
            FieldValue::Empty => None,
        }
    }

    /// Try to convert to float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            FieldValue::Text(s) => s.parse().ok(),
            FieldValue::Empty => None,
        }
    }

    /// The type tag of this value
    pub fn kind(&self) -> FieldType {
        match self {
            FieldValue::Int(_) => FieldType::Int,
            FieldValue::Float(_) => FieldType::Float,
            // Empty fields carry no type evidence beyond "textual"
            FieldValue::Empty | FieldValue::Text(_) => FieldType::Text,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

/// Inferred type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldType {
    /// All usable values parsed as integers
    Int,
    /// Numeric column with at least one non-integer value
    Float,
    /// Anything else
    Text,
}

impl FieldType {
    /// Combine the type evidence of two values in the same column.
    ///
    /// Equal kinds keep the kind, int and float widen to float, and any
    /// other mix collapses to text.
    pub fn unify(self, other: FieldType) -> FieldType {
        match (self, other) {
            (a, b) if a == b => a,
            (FieldType::Int, FieldType::Float) | (FieldType::Float, FieldType::Int) => {
                FieldType::Float
            }
            _ => FieldType::Text,
        }
    }

    /// Human-readable type name
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Text => "text",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
