//! Error types for input ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a file from becoming an [`rfid_model::InputTable`].
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is not one of the supported table formats.
    #[error("unsupported file format '{extension}' for {path} (expected .csv, .xlsx, .xlsm, .xls or .ods)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Parsing Errors ===
    /// Failed to parse CSV records.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Sheet operations requested on a plain CSV file.
    #[error("{path} is not a workbook and has no sheets")]
    NotAWorkbook { path: PathBuf },

    /// Workbook contains no sheets.
    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },

    /// Requested sheet does not exist.
    #[error("sheet '{sheet}' not found in {path} (available: {available})")]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: String,
    },

    /// Nothing to read, not even a header row.
    #[error("no header row found in {path}")]
    EmptyTable { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/taggar.xlsx"),
        };
        assert_eq!(err.to_string(), "input file not found: /path/to/taggar.xlsx");
    }

    #[test]
    fn test_sheet_not_found_lists_available() {
        let err = IngestError::SheetNotFound {
            path: PathBuf::from("taggar.xlsx"),
            sheet: "Blad9".to_string(),
            available: "Blad1, Blad2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "sheet 'Blad9' not found in taggar.xlsx (available: Blad1, Blad2)"
        );
    }
}
