//! Tag validation, duplicate detection and company partitioning.

mod hex;
mod partition;
mod pipeline;
mod report;
mod stats;

pub use hex::{HexValidation, MAX_TAG_LEN, MIN_TAG_LEN, validate_hex};
pub use partition::partition_by_company;
pub use pipeline::{ValidationOutcome, process_rows, validate_table};
pub use report::ReportBuilder;
pub use stats::{CompanyCount, RunStatistics};

use rfid_model::Diagnostics;

/// Whether company files may be written for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatingDecision {
    pub block_export: bool,
    /// Display rows carrying at least one error, ascending and unique.
    pub blocking_rows: Vec<usize>,
}

/// Block export when any row error exists. Warnings never block.
pub fn gate_export(diagnostics: &Diagnostics) -> GatingDecision {
    let mut blocking_rows: Vec<usize> = diagnostics.errors.iter().map(|error| error.row).collect();
    blocking_rows.sort_unstable();
    blocking_rows.dedup();
    GatingDecision {
        block_export: !blocking_rows.is_empty(),
        blocking_rows,
    }
}

#[cfg(test)]
mod tests {
    use rfid_model::Diagnostic;

    use super::*;

    #[test]
    fn warnings_do_not_block_export() {
        let diagnostics = Diagnostics {
            errors: Vec::new(),
            warnings: vec![Diagnostic::duplicate(2, "AABBCC", "X")],
        };
        assert_eq!(gate_export(&diagnostics), GatingDecision::default());
    }

    #[test]
    fn errors_block_export_and_list_rows_once() {
        let diagnostics = Diagnostics {
            errors: vec![
                Diagnostic::reference_not_found(3, "T9", ""),
                Diagnostic::invalid_hex(5, "ZZ", ""),
                Diagnostic::invalid_hex(5, "ZZ", ""),
            ],
            warnings: Vec::new(),
        };
        let decision = gate_export(&diagnostics);
        assert!(decision.block_export);
        assert_eq!(decision.blocking_rows, vec![3, 5]);
    }
}
