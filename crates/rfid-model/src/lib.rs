//! Data model shared by the RFID converter crates.
//!
//! - [`InputTable`] / [`CellValue`]: the parsed spreadsheet snapshot
//! - [`ColumnMapping`]: which columns feed the pipeline
//! - [`ResolvedRow`] / [`CompanyBucket`]: pipeline results
//! - [`Diagnostic`] / [`Diagnostics`]: row-level errors and warnings

pub mod diagnostic;
pub mod mapping;
pub mod normalize;
pub mod row;
pub mod table;

pub use diagnostic::{
    Diagnostic, DiagnosticKind, Diagnostics, MISSING_LABEL, NOT_APPLICABLE_LABEL, Severity,
};
pub use mapping::{ColumnMapping, TagSource};
pub use normalize::{normalize_cell, normalize_optional, normalize_text};
pub use row::{Company, CompanyBucket, DISPLAY_ROW_OFFSET, ResolvedRow, display_row};
pub use table::{CellValue, InputRow, InputTable};
