//! Rows after resolution and validation, and their company partitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Offset between a zero-based data row index and the spreadsheet row a
/// person sees: one for the header row, one for 1-based numbering.
pub const DISPLAY_ROW_OFFSET: usize = 2;

/// Spreadsheet row number for a zero-based data row index.
pub const fn display_row(index: usize) -> usize {
    index + DISPLAY_ROW_OFFSET
}

/// Owning company of a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Company {
    /// No company column configured: every row shares one bucket.
    All,
    /// Company column configured but empty for this row.
    Unspecified,
    Named(String),
}

impl Company {
    pub const ALL_LABEL: &'static str = "Alla";
    pub const UNSPECIFIED_LABEL: &'static str = "Utan_foretag";

    pub fn label(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Unspecified => Self::UNSPECIFIED_LABEL,
            Self::Named(name) => name,
        }
    }

    /// The company name as written in the source, if the row had one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One input row after tag resolution and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRow {
    /// Zero-based index into the source table.
    pub index: usize,
    /// Tag text before validation, possibly produced by the lookup table.
    pub raw_tag: String,
    /// Uppercased, prefix-stripped tag; empty when there was no tag.
    pub clean_tag: String,
    pub tag_valid: bool,
    pub business_id: String,
    pub company: Company,
}

impl ResolvedRow {
    pub fn display_row(&self) -> usize {
        display_row(self.index)
    }

    /// No usable tag and no business identifier.
    pub fn is_blank(&self) -> bool {
        self.clean_tag.is_empty() && self.business_id.is_empty()
    }
}

/// Valid rows of one company, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyBucket {
    pub company: Company,
    pub rows: Vec<ResolvedRow>,
}

impl CompanyBucket {
    pub fn new(company: Company) -> Self {
        Self {
            company,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
