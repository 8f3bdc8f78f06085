//! Row pipeline: tag resolution, validation, blank-row removal and
//! duplicate detection.

use std::collections::HashMap;
use std::time::Instant;

use rfid_map::{LookupTable, MappingError, ResolvedColumns, TagColumn, resolve_columns};
use rfid_model::{
    ColumnMapping, Company, Diagnostic, Diagnostics, InputRow, InputTable, ResolvedRow,
};
use tracing::{debug, info, info_span};

use crate::hex::validate_hex;
use crate::report::ReportBuilder;

/// Rows and diagnostics of one complete pass over the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Surviving rows in source order, valid or not.
    pub rows: Vec<ResolvedRow>,
    pub diagnostics: Diagnostics,
}

impl ValidationOutcome {
    /// No row errors: company files may be written.
    pub fn is_export_ready(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Rows with a valid tag, in source order.
    pub fn valid_rows(&self) -> impl Iterator<Item = &ResolvedRow> {
        self.rows.iter().filter(|row| row.tag_valid)
    }
}

/// Resolve `mapping` against `table` and run every row through the pipeline.
///
/// Mapping problems are fatal and returned before any row is looked at. An
/// indirect mapping requires `lookup`.
pub fn validate_table(
    table: &InputTable,
    mapping: &ColumnMapping,
    lookup: Option<&LookupTable>,
) -> Result<ValidationOutcome, MappingError> {
    let columns = resolve_columns(mapping, table)?;
    let lookup = match (columns.tag, lookup) {
        (TagColumn::Indirect(_), None) => {
            return Err(MappingError::LookupRequired {
                column: mapping
                    .indirect_reference_column
                    .clone()
                    .unwrap_or_default(),
            });
        }
        (TagColumn::Indirect(_), Some(lookup)) => Some(lookup),
        (TagColumn::Direct(_), _) => None,
    };
    Ok(process_rows(table, &columns, lookup))
}

/// Run the per-row pipeline with already resolved columns.
///
/// Always completes a full pass. `lookup` is only consulted for indirect
/// tag columns; a missing table makes every non-empty reference unresolved.
pub fn process_rows(
    table: &InputTable,
    columns: &ResolvedColumns,
    lookup: Option<&LookupTable>,
) -> ValidationOutcome {
    let span = info_span!("validate_rows", rows = table.len());
    let _guard = span.enter();
    let start = Instant::now();

    let mut report = ReportBuilder::new();
    let mut rows = Vec::with_capacity(table.len());
    let mut dropped = 0usize;

    for input in table.rows() {
        let row = resolve_row(&input, columns, lookup, &mut report);
        if row.is_blank() {
            dropped += 1;
            continue;
        }
        rows.push(row);
    }

    report.extend(duplicate_warnings(&rows));
    let diagnostics = report.finish();

    info!(
        input_rows = table.len(),
        kept_rows = rows.len(),
        blank_rows = dropped,
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        duration_ms = start.elapsed().as_millis(),
        "row validation complete"
    );
    ValidationOutcome { rows, diagnostics }
}

fn resolve_row(
    input: &InputRow<'_>,
    columns: &ResolvedColumns,
    lookup: Option<&LookupTable>,
    report: &mut ReportBuilder,
) -> ResolvedRow {
    let index = input.index();
    let display = rfid_model::display_row(index);
    let business_id = columns.business_id_text(input);

    let raw_tag = match columns.tag {
        TagColumn::Direct(_) => columns.tag_text(input),
        TagColumn::Indirect(_) => {
            let reference = columns.tag_text(input);
            match lookup.and_then(|lookup| lookup.resolve(&reference)) {
                Some(identifier) => identifier.to_string(),
                None => {
                    if !reference.is_empty() {
                        report.push(Diagnostic::reference_not_found(
                            display,
                            &reference,
                            &business_id,
                        ));
                    }
                    String::new()
                }
            }
        }
    };

    let (clean_tag, tag_valid) = if raw_tag.is_empty() {
        (String::new(), false)
    } else {
        let validation = validate_hex(&raw_tag);
        if !validation.is_valid {
            report.push(Diagnostic::invalid_hex(display, &raw_tag, &business_id));
        }
        (validation.normalized, validation.is_valid)
    };

    let company = match columns.company_text(input) {
        None => Company::All,
        // A literal `Utan_foretag` shares the bucket of empty company cells.
        Some(name) if name.is_empty() || name == Company::UNSPECIFIED_LABEL => {
            Company::Unspecified
        }
        Some(name) => Company::Named(name),
    };

    // A row without tag and business id is blank and dropped by the caller;
    // it gets no missing-id warning. Tag errors above are still reported.
    if business_id.is_empty() && !clean_tag.is_empty() {
        report.push(Diagnostic::missing_business_id(
            display,
            &clean_tag,
            company.name(),
        ));
    }

    ResolvedRow {
        index,
        raw_tag,
        clean_tag,
        tag_valid,
        business_id,
        company,
    }
}

/// One warning per member of every group of valid rows sharing a clean tag.
fn duplicate_warnings(rows: &[ResolvedRow]) -> Vec<Diagnostic> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in rows.iter().filter(|row| row.tag_valid) {
        *counts.entry(row.clean_tag.as_str()).or_default() += 1;
    }

    let warnings: Vec<Diagnostic> = rows
        .iter()
        .filter(|row| {
            row.tag_valid
                && counts
                    .get(row.clean_tag.as_str())
                    .is_some_and(|count| *count > 1)
        })
        .map(|row| Diagnostic::duplicate(row.display_row(), &row.clean_tag, &row.business_id))
        .collect();

    if !warnings.is_empty() {
        let groups = counts.values().filter(|count| **count > 1).count();
        debug!(groups, rows = warnings.len(), "duplicate tags detected");
    }
    warnings
}
