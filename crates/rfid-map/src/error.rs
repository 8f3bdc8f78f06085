//! Error types for mapping operations.
//!
//! These are configuration errors: they abort a run before any row is
//! processed.

use thiserror::Error;

/// Errors from resolving a column mapping or building a lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Neither a direct nor an indirect tag column is selected.
    #[error("no tag column selected: choose either an RFID/HEX column or a TAGG ID column")]
    NoTagSource,

    /// Both tag columns are selected.
    #[error("both an RFID/HEX column ('{direct}') and a TAGG ID column ('{indirect}') are selected; choose one")]
    ConflictingTagSources { direct: String, indirect: String },

    /// Business identifier column not selected.
    #[error("no business identifier (Identifieringsnummer) column selected")]
    MissingBusinessIdColumn,

    /// A selected column is not present in the input table.
    #[error("{role} column '{column}' not found in input (available: {available})")]
    ColumnNotFound {
        role: &'static str,
        column: String,
        available: String,
    },

    /// Lookup table lacks one of its required columns.
    #[error("lookup table is missing required column(s): {columns}")]
    LookupColumnsMissing { columns: String },

    /// TAGG ID mapping configured without a lookup table.
    #[error("TAGG ID column '{column}' requires a lookup table with 'Visible Number' and 'Key/Card number'")]
    LookupRequired { column: String },
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
