//! Spreadsheet input (`.xlsx`, `.xlsm`, `.xls`, `.ods`) via calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use rfid_model::{CellValue, InputTable, normalize_cell};

use crate::error::{IngestError, Result};
use crate::header::build_headers;

/// Sheet names in workbook order.
pub fn list_workbook_sheets(path: &Path) -> Result<Vec<String>> {
    ensure_exists(path)?;
    let workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(workbook.sheet_names())
}

/// Reads one sheet; `None` picks the first sheet.
pub fn read_workbook_table(path: &Path, sheet: Option<&str>) -> Result<InputTable> {
    ensure_exists(path)?;
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(wanted) => sheet_names
            .iter()
            .find(|name| name.as_str() == wanted)
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: wanted.to_string(),
                available: sheet_names.join(", "),
            })?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| IngestError::NoSheets {
                path: path.to_path_buf(),
            })?,
    };
    tracing::debug!(path = %path.display(), sheet = %sheet_name, "reading worksheet");

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let header_row = rows.next().ok_or_else(|| IngestError::EmptyTable {
        path: path.to_path_buf(),
    })?;
    let headers = build_headers(
        header_row
            .iter()
            .map(|cell| normalize_cell(&cell_from_data(cell))),
    );
    let data_rows = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Ok(InputTable::new(headers, data_rows))
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Map a calamine cell onto the model's cell type. Error cells read as empty.
pub(crate) fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
            CellValue::text(text.clone())
        }
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => {
            if value.is_duration() {
                CellValue::Float(value.as_f64())
            } else {
                value
                    .as_datetime()
                    .map_or(CellValue::Float(value.as_f64()), CellValue::DateTime)
            }
        }
    }
}
