use std::path::PathBuf;

use rfid_output::FileKind;
use rfid_validate::{GatingDecision, RunStatistics, ValidationOutcome};
use serde::Serialize;

/// Exit code for a completed run whose export was blocked by row errors.
pub const EXIT_BLOCKED: i32 = 2;

/// One generated file, written or (in dry-run / blocked runs) only planned.
#[derive(Debug, Clone, Serialize)]
pub struct OutputSummary {
    pub filename: String,
    /// Company label for company files, `None` for reports.
    pub company: Option<String>,
    pub kind: &'static str,
    pub rows: usize,
    /// Set once the file is on disk.
    pub path: Option<PathBuf>,
}

impl OutputSummary {
    pub fn kind_label(kind: &FileKind) -> &'static str {
        match kind {
            FileKind::Company(_) => "company",
            FileKind::ErrorReport => "errors",
            FileKind::WarningReport => "warnings",
        }
    }
}

#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub outcome: ValidationOutcome,
    pub statistics: RunStatistics,
    pub gating: GatingDecision,
    pub files: Vec<OutputSummary>,
}

impl ConvertResult {
    pub fn exit_code(&self) -> i32 {
        if self.gating.block_export {
            EXIT_BLOCKED
        } else {
            0
        }
    }

    pub fn to_summary(&self) -> RunSummary<'_> {
        RunSummary {
            input: &self.input,
            output_dir: &self.output_dir,
            dry_run: self.dry_run,
            export_ready: !self.gating.block_export,
            blocking_rows: &self.gating.blocking_rows,
            statistics: &self.statistics,
            files: &self.files,
        }
    }
}

/// Machine-readable run summary written by `--summary-json`.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub input: &'a PathBuf,
    pub output_dir: &'a PathBuf,
    pub dry_run: bool,
    pub export_ready: bool,
    pub blocking_rows: &'a [usize],
    pub statistics: &'a RunStatistics,
    pub files: &'a [OutputSummary],
}
