//! CSV encoding with RFC 4180-like behavior

/// Append the encoded form of one record to `out`.
///
/// Fields are comma-joined. A field is quoted only when it contains a comma,
/// a quote, or a CR/LF; embedded quotes are doubled. No row terminator is
/// appended, so callers control the line ending.
///
/// Together with [`parse_document`](crate::csv::parse_document) this gives
/// the round-trip property: encoding a record and re-parsing it yields the
/// identical record, whatever quoting style the source document used.
pub fn encode_record<S: AsRef<str>>(fields: &[S], out: &mut String) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        encode_field(field.as_ref(), out);
    }
}

/// Encode a single field with quoting and escaping as needed
fn encode_field(field: &str, out: &mut String) {
    if needs_quoting(field) {
        out.push('"');
        for ch in field.chars() {
            if ch == '"' {
                // Escape quotes by doubling: " -> ""
                out.push('"');
            }
            out.push(ch);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}

/// Check if a field requires quoting
fn needs_quoting(field: &str) -> bool {
    field
        .chars()
        .any(|c| c == ',' || c == '"' || c == '\n' || c == '\r')
}
