//! Conversion stages: ingest, lookup, validate, gate, output.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace, warn};

use rfid_ingest::read_table;
use rfid_map::{LookupTable, MappingError};
use rfid_model::{ColumnMapping, Diagnostics, InputTable};
use rfid_output::{CsvFile, emit_company_files, report_files, write_outputs};
use rfid_validate::{RunStatistics, gate_export, partition_by_company, validate_table};

use crate::logging::redact_value;
use crate::types::{ConvertResult, OutputSummary};

/// Everything one conversion needs, already merged from file and flags.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub sheet: Option<String>,
    pub lookup: Option<PathBuf>,
    pub lookup_sheet: Option<String>,
    pub mapping: ColumnMapping,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

/// Default output directory: `output/` next to the input file.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .map_or_else(|| PathBuf::from("output"), |parent| parent.join("output"))
}

/// Run one conversion.
///
/// Fatal problems (unreadable files, bad mapping, malformed lookup table)
/// are returned as errors before any row is processed. Row problems end up
/// in the result; when any row error exists no company file is produced.
pub fn run_convert(options: &ConvertOptions) -> Result<ConvertResult> {
    let run_span = info_span!("convert", input = %options.input.display());
    let _run_guard = run_span.enter();

    // Stage 1: ingest
    let ingest_start = Instant::now();
    let table = info_span!("ingest").in_scope(|| {
        read_table(&options.input, options.sheet.as_deref())
            .with_context(|| format!("load input {}", options.input.display()))
    })?;
    info!(
        rows = table.len(),
        columns = table.headers().len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // Stage 2: lookup table, only for indirect mappings
    let lookup = load_lookup(options)?;

    // Stage 3: validate
    let outcome = info_span!("validate").in_scope(|| {
        validate_table(&table, &options.mapping, lookup.as_ref()).context("resolve column mapping")
    })?;
    log_diagnostics(&outcome.diagnostics);
    let statistics = RunStatistics::from_outcome(table.len(), &outcome);

    // Stage 4: gate
    let gating = gate_export(&outcome.diagnostics);
    if gating.block_export {
        warn!(
            errors = outcome.diagnostics.error_count(),
            rows = gating.blocking_rows.len(),
            "export blocked by row errors"
        );
    }

    // Stage 5: output
    let output_start = Instant::now();
    let output_span = info_span!("output", dir = %options.output_dir.display());
    let files = output_span.in_scope(|| -> Result<Vec<OutputSummary>> {
        let mut files: Vec<CsvFile> = Vec::new();
        if !gating.block_export {
            let buckets = partition_by_company(&outcome.rows);
            if buckets.is_empty() {
                warn!("no valid rows to export");
            }
            files.extend(emit_company_files(&buckets).context("serialize company files")?);
        }
        files.extend(report_files(&outcome.diagnostics).context("serialize reports")?);

        let paths = if options.dry_run {
            info!(files = files.len(), "dry run: nothing written");
            vec![None; files.len()]
        } else {
            write_outputs(&options.output_dir, &files)
                .context("write output files")?
                .into_iter()
                .map(Some)
                .collect()
        };

        Ok(files
            .iter()
            .zip(paths)
            .map(|(file, path)| OutputSummary {
                filename: file.filename.clone(),
                company: file.company().map(|company| company.label().to_string()),
                kind: OutputSummary::kind_label(&file.kind),
                rows: file.row_count,
                path,
            })
            .collect())
    })?;
    info!(
        files = files.len(),
        dry_run = options.dry_run,
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );

    Ok(ConvertResult {
        input: options.input.clone(),
        output_dir: options.output_dir.clone(),
        dry_run: options.dry_run,
        outcome,
        statistics,
        gating,
        files,
    })
}

fn load_lookup(options: &ConvertOptions) -> Result<Option<LookupTable>> {
    if !options.mapping.uses_lookup() {
        if let Some(path) = &options.lookup {
            warn!(path = %path.display(), "lookup table ignored for direct RFID mapping");
        }
        return Ok(None);
    }

    let path = options
        .lookup
        .as_deref()
        .ok_or_else(|| MappingError::LookupRequired {
            column: options
                .mapping
                .indirect_reference_column
                .clone()
                .unwrap_or_default(),
        })?;

    let start = Instant::now();
    let lookup = info_span!("lookup", path = %path.display()).in_scope(|| -> Result<LookupTable> {
        let table: InputTable = read_table(path, options.lookup_sheet.as_deref())
            .with_context(|| format!("load lookup table {}", path.display()))?;
        LookupTable::build(&table).with_context(|| format!("invalid lookup table {}", path.display()))
    })?;
    info!(
        entries = lookup.len(),
        overwritten = lookup.overwritten(),
        duration_ms = start.elapsed().as_millis(),
        "lookup table loaded"
    );
    Ok(Some(lookup))
}

fn log_diagnostics(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.errors.iter().chain(&diagnostics.warnings) {
        trace!(
            row = diagnostic.row,
            kind = diagnostic.kind.code(),
            severity = diagnostic.severity().label(),
            value = %redact_value(&diagnostic.value),
            business_id = %redact_value(diagnostic.business_id.as_deref().unwrap_or_default()),
            "row diagnostic"
        );
    }
}
