//! Input ingestion for the RFID converter.
//!
//! Turns a `.csv` file or one sheet of a workbook into an
//! [`rfid_model::InputTable`]. The first row is always the header row.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rfid_ingest::{list_sheets, read_table};
//!
//! let path = Path::new("taggar.xlsx");
//! let sheets = list_sheets(path)?;
//! let table = read_table(path, Some(&sheets[1]))?;
//! ```

mod delimited;
mod error;
mod header;
mod workbook;

use std::path::Path;

use rfid_model::InputTable;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use delimited::read_csv_table;
pub use workbook::{list_workbook_sheets, read_workbook_table};

/// Supported input formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Workbook,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        match extension.as_str() {
            "csv" | "txt" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Read a table from `path`, selecting `sheet` for workbooks.
///
/// A sheet name given for a CSV file is ignored.
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<InputTable> {
    let table = match SourceFormat::from_path(path)? {
        SourceFormat::Csv => {
            if let Some(sheet) = sheet {
                tracing::warn!(path = %path.display(), sheet, "ignoring sheet for csv input");
            }
            read_csv_table(path)?
        }
        SourceFormat::Workbook => read_workbook_table(path, sheet)?,
    };
    tracing::debug!(
        path = %path.display(),
        columns = table.headers().len(),
        rows = table.len(),
        "table loaded"
    );
    Ok(table)
}

/// Sheet names of a workbook.
pub fn list_sheets(path: &Path) -> Result<Vec<String>> {
    match SourceFormat::from_path(path)? {
        SourceFormat::Csv => Err(IngestError::NotAWorkbook {
            path: path.to_path_buf(),
        }),
        SourceFormat::Workbook => list_workbook_sheets(path),
    }
}
