//! Run statistics for the summary output.

use std::collections::HashSet;

use rfid_model::{Company, DiagnosticKind};
use serde::Serialize;

use crate::partition::partition_by_company;
use crate::pipeline::ValidationOutcome;

/// Valid rows owned by one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyCount {
    pub company: Company,
    pub rows: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    /// Data rows read from the input, blank rows included.
    pub input_rows: usize,
    /// Rows dropped as fully blank.
    pub blank_rows: usize,
    /// Rows with a valid tag, duplicates included.
    pub valid_rows: usize,
    pub unique_tags: usize,
    /// Valid rows that share their tag with another valid row.
    pub duplicate_rows: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// Valid rows per company, largest first.
    pub companies: Vec<CompanyCount>,
}

impl RunStatistics {
    pub fn from_outcome(input_rows: usize, outcome: &ValidationOutcome) -> Self {
        let valid_rows = outcome.valid_rows().count();
        let unique_tags = outcome
            .valid_rows()
            .map(|row| row.clean_tag.as_str())
            .collect::<HashSet<_>>()
            .len();

        let mut companies: Vec<CompanyCount> = partition_by_company(&outcome.rows)
            .into_iter()
            .map(|bucket| CompanyCount {
                rows: bucket.len(),
                company: bucket.company,
            })
            .collect();
        // Stable: ties keep first-appearance order.
        companies.sort_by(|a, b| b.rows.cmp(&a.rows));

        Self {
            input_rows,
            blank_rows: input_rows.saturating_sub(outcome.rows.len()),
            valid_rows,
            unique_tags,
            duplicate_rows: outcome
                .diagnostics
                .count_of(DiagnosticKind::DuplicateIdentifier),
            error_count: outcome.diagnostics.error_count(),
            warning_count: outcome.diagnostics.warning_count(),
            companies,
        }
    }
}

#[cfg(test)]
mod tests {
    use rfid_model::{ColumnMapping, InputTable};

    use super::*;
    use crate::pipeline::validate_table;

    #[test]
    fn counts_valid_unique_and_duplicate_rows() {
        let table = InputTable::from_text(
            ["RFID", "Regnr", "Bolag"],
            [
                ["AABBCC01", "A1", "Beta"],
                ["AABBCC02", "A2", "Acme"],
                ["AABBCC01", "A3", "Acme"],
                ["ZZZ", "A4", "Acme"],
                ["", "", ""],
            ],
        );
        let mapping = ColumnMapping::direct("RFID", "Regnr").with_company("Bolag");
        let outcome = validate_table(&table, &mapping, None).unwrap();
        let stats = RunStatistics::from_outcome(table.len(), &outcome);

        assert_eq!(stats.input_rows, 5);
        assert_eq!(stats.blank_rows, 1);
        assert_eq!(stats.valid_rows, 3);
        assert_eq!(stats.unique_tags, 2);
        assert_eq!(stats.duplicate_rows, 2);
        assert_eq!(stats.error_count, 1);
        assert_eq!(stats.warning_count, 2);
        assert_eq!(
            stats.companies,
            vec![
                CompanyCount {
                    company: Company::Named("Acme".to_string()),
                    rows: 2,
                },
                CompanyCount {
                    company: Company::Named("Beta".to_string()),
                    rows: 1,
                },
            ]
        );
    }
}
