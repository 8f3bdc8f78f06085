//! Report builder: collects diagnostics during a run.

use rfid_model::{Diagnostic, Diagnostics, Severity};

/// Accumulates diagnostics, routing each to errors or warnings by severity.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Error => {
                tracing::trace!(row = diagnostic.row, kind = diagnostic.kind.code(), "row error");
                self.errors.push(diagnostic);
            }
            Severity::Warning => {
                tracing::trace!(row = diagnostic.row, kind = diagnostic.kind.code(), "row warning");
                self.warnings.push(diagnostic);
            }
        }
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Finish the report with both sequences ordered by row.
    ///
    /// The sort is stable, so diagnostics of the same row keep the order in
    /// which they were pushed.
    pub fn finish(self) -> Diagnostics {
        let Self {
            mut errors,
            mut warnings,
        } = self;
        errors.sort_by_key(|diagnostic| diagnostic.row);
        warnings.sort_by_key(|diagnostic| diagnostic.row);
        Diagnostics { errors, warnings }
    }
}
