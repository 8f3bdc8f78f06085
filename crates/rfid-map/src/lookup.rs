//! TAGG ID lookup table.
//!
//! The auxiliary "MER" export maps the printed tag label (`Visible Number`)
//! to the programmed identifier (`Key/Card number`).

use std::collections::HashMap;

use rfid_model::InputTable;

use crate::error::{MappingError, Result};

/// Column holding the human-facing TAGG ID.
pub const VISIBLE_NUMBER_COLUMN: &str = "Visible Number";
/// Column holding the RFID/HEX identifier.
pub const KEY_CARD_NUMBER_COLUMN: &str = "Key/Card number";

/// Reference → identifier map. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: HashMap<String, String>,
    overwritten: usize,
}

impl LookupTable {
    /// Build from the auxiliary table.
    ///
    /// Both required columns must be present by exact name. Rows with an
    /// empty reference are skipped; a reference that appears more than once
    /// maps to the identifier of its last row.
    pub fn build(table: &InputTable) -> Result<Self> {
        let visible = table.column_index_exact(VISIBLE_NUMBER_COLUMN);
        let key = table.column_index_exact(KEY_CARD_NUMBER_COLUMN);
        let (visible, key) = match (visible, key) {
            (Some(visible), Some(key)) => (visible, key),
            _ => {
                let missing: Vec<&str> = [
                    (visible, VISIBLE_NUMBER_COLUMN),
                    (key, KEY_CARD_NUMBER_COLUMN),
                ]
                .into_iter()
                .filter(|(index, _)| index.is_none())
                .map(|(_, name)| name)
                .collect();
                return Err(MappingError::LookupColumnsMissing {
                    columns: missing.join(", "),
                });
            }
        };

        let mut lookup = Self::default();
        for row in table.rows() {
            let reference = row.text(visible);
            if reference.is_empty() {
                continue;
            }
            let identifier = row.text(key);
            if lookup.entries.insert(reference, identifier).is_some() {
                lookup.overwritten += 1;
            }
        }

        if lookup.overwritten > 0 {
            tracing::warn!(
                duplicate_references = lookup.overwritten,
                "lookup table has repeated Visible Number values; last occurrence wins"
            );
        }
        tracing::debug!(entries = lookup.entries.len(), "lookup table built");
        Ok(lookup)
    }

    /// Identifier for `reference`.
    ///
    /// `None` for an empty reference, an unknown reference, or a reference
    /// whose identifier cell is empty.
    pub fn resolve(&self, reference: &str) -> Option<&str> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }
        self.entries
            .get(reference)
            .map(String::as_str)
            .filter(|identifier| !identifier.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many rows replaced an earlier entry with the same reference.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }
}
