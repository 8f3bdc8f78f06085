//! Column-mapping configuration: TOML file plus CLI overrides.
//!
//! ```toml
//! direct-identifier-column = "RFID"
//! business-id-column = "Regnummer"
//! company-column = "Företag"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rfid_model::ColumnMapping;

/// Column names given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingOverrides {
    pub rfid_column: Option<String>,
    pub tag_column: Option<String>,
    pub id_column: Option<String>,
    pub company_column: Option<String>,
}

impl MappingOverrides {
    fn into_mapping(self) -> ColumnMapping {
        ColumnMapping {
            direct_identifier_column: self.rfid_column,
            indirect_reference_column: self.tag_column,
            business_id_column: self.id_column,
            company_column: self.company_column,
        }
    }
}

pub fn parse_mapping(text: &str) -> Result<ColumnMapping> {
    toml::from_str(text).context("parse column mapping")
}

pub fn load_mapping_file(path: &Path) -> Result<ColumnMapping> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read mapping {}", path.display()))?;
    parse_mapping(&text).with_context(|| format!("invalid mapping file {}", path.display()))
}

/// Mapping file (if any) with CLI overrides layered on top.
///
/// The result is not validated here; that happens against the input table.
pub fn build_mapping(file: Option<&Path>, overrides: MappingOverrides) -> Result<ColumnMapping> {
    let base = match file {
        Some(path) => load_mapping_file(path)?,
        None => ColumnMapping::default(),
    };
    let mapping = base.with_overrides(overrides.into_mapping());
    tracing::debug!(?mapping, "column mapping configured");
    Ok(mapping)
}
