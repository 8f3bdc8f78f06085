//! Diagnostic report files.
//!
//! Reports are comma-separated, UTF-8 with a BOM, one line per diagnostic in
//! the order given (row order as produced by the pipeline).

use csv::{Terminator, WriterBuilder};
use rfid_model::{Diagnostic, Diagnostics};

use crate::emit::{CsvFile, FileKind, UTF8_BOM};
use crate::error::{OutputError, Result};

pub const ERROR_REPORT_FILENAME: &str = "felrapport.csv";
pub const WARNING_REPORT_FILENAME: &str = "varningar.csv";

pub const REPORT_HEADER: [&str; 5] = ["Rad", "Problem", "Värde", "Identifieringsnummer", "Företag"];

/// Render diagnostics as a report table.
pub fn write_diagnostic_report(diagnostics: &[Diagnostic]) -> Result<Vec<u8>> {
    let target = "diagnostic report".to_string();
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(UTF8_BOM.to_vec());
    writer
        .write_record(REPORT_HEADER)
        .map_err(|source| OutputError::Csv {
            target: target.clone(),
            source,
        })?;

    for diagnostic in diagnostics {
        let row = diagnostic.row.to_string();
        writer
            .write_record([
                row.as_str(),
                diagnostic.kind.label(),
                diagnostic.value_label(),
                diagnostic.business_id_label(),
                diagnostic.company_label(),
            ])
            .map_err(|source| OutputError::Csv {
                target: target.clone(),
                source,
            })?;
    }

    writer.into_inner().map_err(|err| OutputError::Buffer {
        target,
        source: err.into_error(),
    })
}

/// Error and warning reports for a run; a report is omitted when it would
/// be empty.
pub fn report_files(diagnostics: &Diagnostics) -> Result<Vec<CsvFile>> {
    let mut files = Vec::with_capacity(2);
    if !diagnostics.errors.is_empty() {
        files.push(CsvFile {
            filename: ERROR_REPORT_FILENAME.to_string(),
            kind: FileKind::ErrorReport,
            row_count: diagnostics.errors.len(),
            bytes: write_diagnostic_report(&diagnostics.errors)?,
        });
    }
    if !diagnostics.warnings.is_empty() {
        files.push(CsvFile {
            filename: WARNING_REPORT_FILENAME.to_string(),
            kind: FileKind::WarningReport,
            row_count: diagnostics.warnings.len(),
            bytes: write_diagnostic_report(&diagnostics.warnings)?,
        });
    }
    Ok(files)
}
