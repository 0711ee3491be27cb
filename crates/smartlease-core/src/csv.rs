//! CSV Export
//!
//! Turns an ordered sequence of flat records into a comma-separated text
//! blob: one header row, one row per record. Every field is quoted and
//! embedded quotes are doubled (RFC 4180 style), so commas, quotes, and
//! newlines inside a field survive intact. Rows end in CRLF.

use thiserror::Error;

/// Export failures surfaced to the user before any file is produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The filtered dataset is empty; exporting would produce a file with
    /// no data rows, so the export is blocked instead.
    #[error("no records to export")]
    EmptyDataset,
}

/// A record type that can be flattened into a CSV report row
pub trait CsvRecord {
    /// Column names, in row order
    fn headers() -> &'static [&'static str];

    /// One row of field values; must match `headers()` in length and order
    fn row(&self) -> Vec<String>;
}

/// Serialize records to a CSV string, or refuse an empty dataset.
pub fn to_csv<T: CsvRecord>(records: &[T]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyDataset);
    }

    let mut out = String::new();
    push_row(&mut out, T::headers().iter().map(|h| (*h).to_string()));
    for record in records {
        push_row(&mut out, record.row().into_iter());
    }
    Ok(out)
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let quoted: Vec<String> = fields.map(|f| quote_field(&f)).collect();
    out.push_str(&quoted.join(","));
    out.push_str("\r\n");
}

fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(Vec<String>);

    impl CsvRecord for Row {
        fn headers() -> &'static [&'static str] {
            &["name", "note"]
        }

        fn row(&self) -> Vec<String> {
            self.0.clone()
        }
    }

    fn row(name: &str, note: &str) -> Row {
        Row(vec![name.to_string(), note.to_string()])
    }

    #[test]
    fn test_empty_dataset_is_refused() {
        let records: Vec<Row> = Vec::new();
        assert_eq!(to_csv(&records), Err(ExportError::EmptyDataset));
    }

    #[test]
    fn test_header_row_comes_first() {
        let csv = to_csv(&[row("Alice", "ok")]).unwrap();
        assert!(csv.starts_with("\"name\",\"note\"\r\n"));
    }

    #[test]
    fn test_fields_with_commas_stay_one_field() {
        let csv = to_csv(&[row("Sunrise Apts, Block A", "ok")]).unwrap();
        let data_line = csv.lines().nth(1).unwrap();
        assert_eq!(data_line, "\"Sunrise Apts, Block A\",\"ok\"");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let csv = to_csv(&[row("the \"A4\" unit", "ok")]).unwrap();
        assert!(csv.contains("\"the \"\"A4\"\" unit\""));
    }

    #[test]
    fn test_embedded_newline_stays_quoted() {
        let csv = to_csv(&[row("line one\nline two", "ok")]).unwrap();
        assert!(csv.contains("\"line one\nline two\""));
    }

    #[test]
    fn test_one_row_per_record() {
        let csv = to_csv(&[row("a", "1"), row("b", "2")]).unwrap();
        assert_eq!(csv.matches("\r\n").count(), 3);
    }
}
