//! Column-mapping resolution.
//!
//! Turns a name-based [`ColumnMapping`] into stable column indices for one
//! table, checking the mapping invariants on the way.

use rfid_model::{ColumnMapping, InputRow, InputTable, TagSource};

use crate::error::{MappingError, Result};

/// Index of the column supplying the tag, tagged with how to interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagColumn {
    /// RFID/HEX value used as-is.
    Direct(usize),
    /// TAGG ID resolved through the lookup table.
    Indirect(usize),
}

impl TagColumn {
    pub fn index(&self) -> usize {
        match self {
            Self::Direct(index) | Self::Indirect(index) => *index,
        }
    }
}

/// A [`ColumnMapping`] bound to the columns of a specific table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub tag: TagColumn,
    pub business_id: usize,
    pub company: Option<usize>,
}

impl ResolvedColumns {
    /// Normalized tag cell (the TAGG ID for indirect mappings).
    pub fn tag_text(&self, row: &InputRow<'_>) -> String {
        row.text(self.tag.index())
    }

    pub fn business_id_text(&self, row: &InputRow<'_>) -> String {
        row.text(self.business_id)
    }

    /// Normalized company cell, `None` when no company column is mapped.
    pub fn company_text(&self, row: &InputRow<'_>) -> Option<String> {
        self.company.map(|column| row.text(column))
    }

    pub fn uses_lookup(&self) -> bool {
        matches!(self.tag, TagColumn::Indirect(_))
    }
}

/// Check the mapping invariants and locate every mapped column in `table`.
pub fn resolve_columns(mapping: &ColumnMapping, table: &InputTable) -> Result<ResolvedColumns> {
    let tag_source = match mapping.tag_source() {
        Some(source) => source,
        None => {
            return Err(
                match (
                    mapping.direct_identifier_column.as_deref(),
                    mapping.indirect_reference_column.as_deref(),
                ) {
                    (Some(direct), Some(indirect))
                        if !direct.trim().is_empty() && !indirect.trim().is_empty() =>
                    {
                        MappingError::ConflictingTagSources {
                            direct: direct.to_string(),
                            indirect: indirect.to_string(),
                        }
                    }
                    _ => MappingError::NoTagSource,
                },
            );
        }
    };
    let business_id_column = mapping
        .business_id()
        .ok_or(MappingError::MissingBusinessIdColumn)?;

    let tag = match tag_source {
        TagSource::Direct(column) => TagColumn::Direct(locate(table, "RFID/HEX", column)?),
        TagSource::Indirect(column) => TagColumn::Indirect(locate(table, "TAGG ID", column)?),
    };
    let business_id = locate(table, "Identifieringsnummer", business_id_column)?;
    let company = mapping
        .company()
        .map(|column| locate(table, "company", column))
        .transpose()?;

    tracing::debug!(?tag, business_id, ?company, "column mapping resolved");
    Ok(ResolvedColumns {
        tag,
        business_id,
        company,
    })
}

fn locate(table: &InputTable, role: &'static str, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| MappingError::ColumnNotFound {
            role,
            column: column.to_string(),
            available: table.headers().join(", "),
        })
}
