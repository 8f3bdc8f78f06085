//! Row-level diagnostics.
//!
//! Each kind carries its own severity: errors block export, warnings never
//! do. Values that were absent in the source are kept as `None`/empty and
//! only rendered as placeholders at the report boundary.

use serde::{Deserialize, Serialize};

/// Placeholder rendered for a missing tag or business identifier.
pub const MISSING_LABEL: &str = "Saknas";

/// Placeholder rendered for a missing company.
pub const NOT_APPLICABLE_LABEL: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks export.
    Error,
    /// Reported only.
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Non-empty TAGG ID with no entry in the lookup table.
    ReferenceNotFound,
    /// Tag present but not 6-10 hex digits.
    InvalidHexFormat,
    /// Empty business identifier.
    MissingBusinessId,
    /// Same clean tag on more than one valid row.
    DuplicateIdentifier,
}

impl DiagnosticKind {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReferenceNotFound => "reference-not-found",
            Self::InvalidHexFormat => "invalid-hex-format",
            Self::MissingBusinessId => "missing-business-id",
            Self::DuplicateIdentifier => "duplicate-identifier",
        }
    }

    /// Swedish problem text shown to data owners.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ReferenceNotFound => "TAGG ID saknas i MER-fil",
            Self::InvalidHexFormat => "Ogiltigt HEX-format",
            Self::MissingBusinessId => "Identifieringsnummer saknas",
            Self::DuplicateIdentifier => "Duplicerat RFID",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::ReferenceNotFound | Self::InvalidHexFormat => Severity::Error,
            Self::MissingBusinessId | Self::DuplicateIdentifier => Severity::Warning,
        }
    }
}

/// One problem tied to one input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Spreadsheet row number (header-offset, 1-based).
    pub row: usize,
    pub kind: DiagnosticKind,
    /// Offending value: the reference, raw tag or clean tag depending on kind.
    pub value: String,
    /// Business identifier of the row, `None` when empty.
    pub business_id: Option<String>,
    /// Company of the row, `None` when empty or not configured.
    pub company: Option<String>,
}

impl Diagnostic {
    pub fn reference_not_found(row: usize, reference: &str, business_id: &str) -> Self {
        Self {
            row,
            kind: DiagnosticKind::ReferenceNotFound,
            value: reference.to_string(),
            business_id: non_empty(business_id),
            company: None,
        }
    }

    pub fn invalid_hex(row: usize, raw_tag: &str, business_id: &str) -> Self {
        Self {
            row,
            kind: DiagnosticKind::InvalidHexFormat,
            value: raw_tag.to_string(),
            business_id: non_empty(business_id),
            company: None,
        }
    }

    pub fn missing_business_id(row: usize, clean_tag: &str, company: Option<&str>) -> Self {
        Self {
            row,
            kind: DiagnosticKind::MissingBusinessId,
            value: clean_tag.to_string(),
            business_id: None,
            company: company.and_then(non_empty),
        }
    }

    pub fn duplicate(row: usize, clean_tag: &str, business_id: &str) -> Self {
        Self {
            row,
            kind: DiagnosticKind::DuplicateIdentifier,
            value: clean_tag.to_string(),
            business_id: non_empty(business_id),
            company: None,
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn value_label(&self) -> &str {
        if self.value.is_empty() {
            MISSING_LABEL
        } else {
            &self.value
        }
    }

    pub fn business_id_label(&self) -> &str {
        self.business_id.as_deref().unwrap_or(MISSING_LABEL)
    }

    pub fn company_label(&self) -> &str {
        self.company.as_deref().unwrap_or(NOT_APPLICABLE_LABEL)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Errors and warnings of one run, each in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        let list = match kind.severity() {
            Severity::Error => &self.errors,
            Severity::Warning => &self.warnings,
        };
        list.iter().filter(|diagnostic| diagnostic.kind == kind).count()
    }
}
