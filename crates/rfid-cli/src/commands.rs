use std::fs;

use anyhow::{Context, Result};
use comfy_table::Table;

use rfid_cli::config::{MappingOverrides, build_mapping};
use rfid_cli::pipeline::{ConvertOptions, default_output_dir, run_convert};
use rfid_cli::types::ConvertResult;
use rfid_ingest::list_sheets;

use crate::cli::{ConvertArgs, SheetsArgs};
use crate::summary::apply_table_style;

pub fn run_sheets(args: &SheetsArgs) -> Result<()> {
    let sheets = list_sheets(&args.workbook)
        .with_context(|| format!("list sheets of {}", args.workbook.display()))?;
    let mut table = Table::new();
    table.set_header(vec!["#", "Sheet"]);
    apply_table_style(&mut table);
    for (index, sheet) in sheets.into_iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), sheet]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_convert_command(args: &ConvertArgs) -> Result<ConvertResult> {
    let overrides = MappingOverrides {
        rfid_column: args.rfid_column.clone(),
        tag_column: args.tag_column.clone(),
        id_column: args.id_column.clone(),
        company_column: args.company_column.clone(),
    };
    let mapping = build_mapping(args.mapping.as_deref(), overrides)?;
    let options = ConvertOptions {
        input: args.input.clone(),
        sheet: args.sheet.clone(),
        lookup: args.lookup.clone(),
        lookup_sheet: args.lookup_sheet.clone(),
        mapping,
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&args.input)),
        dry_run: args.dry_run,
    };

    let result = run_convert(&options)?;

    if let Some(path) = &args.summary_json {
        let json = serde_json::to_string_pretty(&result.to_summary())
            .context("serialize run summary")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(result)
}
