use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rfid_model::{Diagnostic, Severity};
use rfid_cli::types::{ConvertResult, OutputSummary};

pub fn print_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    if result.dry_run {
        println!("Output: {} (dry run, nothing written)", result.output_dir.display());
    } else {
        println!("Output: {}", result.output_dir.display());
    }

    print_file_table(&result.files);
    print_statistics(result);
    print_diagnostic_table("Errors:", &result.outcome.diagnostics.errors);
    print_diagnostic_table("Warnings:", &result.outcome.diagnostics.warnings);

    if result.gating.block_export {
        eprintln!(
            "Export blocked: {} error(s) on {} row(s). Fix the input file and run again.",
            result.statistics.error_count,
            result.gating.blocking_rows.len()
        );
    }
}

fn print_file_table(files: &[OutputSummary]) {
    if files.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Company"),
        header_cell("Rows"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    let mut total_rows = 0usize;
    for file in files {
        if file.company.is_some() {
            total_rows += file.rows;
        }
        table.add_row(vec![
            file_cell(file),
            match &file.company {
                Some(company) => Cell::new(company),
                None => dim_cell(file.kind),
            },
            Cell::new(file.rows),
            written_cell(file.path.is_some()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("All companies")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn print_statistics(result: &ConvertResult) {
    let stats = &result.statistics;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input rows"), Cell::new(stats.input_rows)]);
    table.add_row(vec![Cell::new("Blank rows dropped"), Cell::new(stats.blank_rows)]);
    table.add_row(vec![Cell::new("Valid rows"), Cell::new(stats.valid_rows)]);
    table.add_row(vec![Cell::new("Unique RFID"), Cell::new(stats.unique_tags)]);
    table.add_row(vec![
        Cell::new("Duplicate rows"),
        count_cell(stats.duplicate_rows, Color::Yellow),
    ]);
    table.add_row(vec![Cell::new("Errors"), count_cell(stats.error_count, Color::Red)]);
    table.add_row(vec![
        Cell::new("Warnings"),
        count_cell(stats.warning_count, Color::Yellow),
    ]);
    for company in &stats.companies {
        table.add_row(vec![
            Cell::new(format!("  {}", company.company)).fg(Color::Blue),
            Cell::new(company.rows),
        ]);
    }
    println!();
    println!("{table}");
}

fn print_diagnostic_table(title: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rad"),
        header_cell("Severity"),
        header_cell("Problem"),
        header_cell("Värde"),
        header_cell("Identifieringsnummer"),
        header_cell("Företag"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for diagnostic in diagnostics {
        table.add_row(vec![
            Cell::new(diagnostic.row),
            severity_cell(diagnostic.severity()),
            Cell::new(diagnostic.kind.label()),
            Cell::new(diagnostic.value_label()),
            Cell::new(diagnostic.business_id_label()),
            Cell::new(diagnostic.company_label()),
        ]);
    }
    println!();
    println!("{title}");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_cell(file: &OutputSummary) -> Cell {
    if file.company.is_some() {
        Cell::new(&file.filename)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(&file.filename).fg(Color::DarkGrey)
    }
}

fn written_cell(written: bool) -> Cell {
    if written {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
