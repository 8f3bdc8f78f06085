//! Output generation for the RFID converter.
//!
//! Company files are `;`-separated with header `RFID;Identifieringsnummer`;
//! diagnostic reports are `,`-separated. Both are UTF-8 with a BOM.

mod emit;
mod error;
mod report;
mod sanitize;
mod write;

pub use emit::{
    COMPANY_HEADER, CsvFile, FileKind, UTF8_BOM, company_filename, emit_company_csv,
    emit_company_files,
};
pub use error::{OutputError, Result};
pub use report::{
    ERROR_REPORT_FILENAME, REPORT_HEADER, WARNING_REPORT_FILENAME, report_files,
    write_diagnostic_report,
};
pub use sanitize::sanitize_filename;
pub use write::write_outputs;
