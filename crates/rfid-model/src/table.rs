//! In-memory tabular input.
//!
//! A table is a header row plus rectangular data rows of typed cells. Readers
//! in `rfid-ingest` produce it; everything downstream only reads it.

use chrono::NaiveDateTime;

use crate::normalize::normalize_optional;

/// A single spreadsheet cell as it came out of the reader.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Wrap raw text, mapping the empty string to [`CellValue::Empty`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

/// Header names plus data rows, all rows padded to the header width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl InputTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Build a table from plain strings. Empty strings become empty cells.
    pub fn from_text<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let headers = headers.into_iter().map(Into::into).collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(CellValue::text).collect())
            .collect();
        Self::new(headers, rows)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exact header match.
    pub fn column_index_exact(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Exact header match first, then a trimmed case-insensitive match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_index_exact(name).or_else(|| {
            let wanted = name.trim();
            self.headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(wanted))
                .or_else(|| {
                    let wanted = wanted.to_lowercase();
                    self.headers
                        .iter()
                        .position(|header| header.trim().to_lowercase() == wanted)
                })
        })
    }

    pub fn row(&self, index: usize) -> Option<InputRow<'_>> {
        self.rows.get(index).map(|cells| InputRow { index, cells })
    }

    pub fn rows(&self) -> impl Iterator<Item = InputRow<'_>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, cells)| InputRow { index, cells })
    }
}

/// Borrowed view of one data row.
#[derive(Debug, Clone, Copy)]
pub struct InputRow<'a> {
    index: usize,
    cells: &'a [CellValue],
}

impl<'a> InputRow<'a> {
    /// Zero-based position among the data rows.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cell(&self, column: usize) -> Option<&'a CellValue> {
        self.cells.get(column)
    }

    /// Normalized text of a column; absent cells normalize to `""`.
    pub fn text(&self, column: usize) -> String {
        normalize_optional(self.cell(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_padded_to_header_width() {
        let table = InputTable::from_text(["A", "B", "C"], [vec!["1"], vec!["1", "2", "3"]]);
        let first = table.row(0).unwrap();
        assert_eq!(first.cell(2), Some(&CellValue::Empty));
        assert_eq!(first.text(0), "1");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn column_lookup_prefers_exact_then_case_insensitive() {
        let table = InputTable::from_text(["RFID", "rfid ", "Företag"], Vec::<Vec<&str>>::new());
        assert_eq!(table.column_index("RFID"), Some(0));
        assert_eq!(table.column_index("rfid "), Some(1));
        assert_eq!(table.column_index("Rfid"), Some(0));
        assert_eq!(table.column_index("FÖRETAG"), Some(2));
        assert_eq!(table.column_index("Missing"), None);
        assert_eq!(table.column_index_exact("Rfid"), None);
    }

    #[test]
    fn empty_strings_become_empty_cells() {
        assert_eq!(CellValue::from(""), CellValue::Empty);
        assert_eq!(CellValue::from("x"), CellValue::Text("x".to_string()));
    }
}
