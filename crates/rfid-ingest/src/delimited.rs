//! Delimited text (CSV) input.

use std::path::Path;

use csv::ReaderBuilder;
use rfid_model::{CellValue, InputTable};

use crate::error::{IngestError, Result};
use crate::header::build_headers;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads a CSV file; the first record is the header row.
///
/// The delimiter is `;` when the header line has more semicolons than
/// commas, otherwise `,`. Short records are padded with empty cells.
pub fn read_csv_table(path: &Path) -> Result<InputTable> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_csv_bytes(&bytes, path)
}

pub(crate) fn parse_csv_bytes(bytes: &[u8], path: &Path) -> Result<InputTable> {
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let delimiter = detect_delimiter(content);
    tracing::debug!(
        path = %path.display(),
        delimiter = %char::from(delimiter),
        "reading csv"
    );

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content);

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            return Err(IngestError::EmptyTable {
                path: path.to_path_buf(),
            });
        }
    };
    let headers = build_headers(header.iter());

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(CellValue::from).collect());
    }

    Ok(InputTable::new(headers, rows))
}

fn detect_delimiter(content: &[u8]) -> u8 {
    let first_line = content
        .split(|&byte| byte == b'\n')
        .next()
        .unwrap_or_default();
    let semicolons = first_line.iter().filter(|&&byte| byte == b';').count();
    let commas = first_line.iter().filter(|&&byte| byte == b',').count();
    if semicolons > commas { b';' } else { b',' }
}
