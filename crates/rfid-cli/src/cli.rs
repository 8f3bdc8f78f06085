//! CLI argument definitions for the RFID converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rfid-converter",
    version,
    about = "Convert RFID tag spreadsheets into per-company CSV files",
    long_about = "Convert RFID tag spreadsheets into per-company CSV files.\n\n\
                  Tags are validated as 6-10 hex digits, optionally resolved from\n\
                  TAGG IDs through a MER lookup file, and written as\n\
                  `RFID;Identifieringsnummer` files (UTF-8 with BOM)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include tag and identifier values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an input file and write one CSV per company.
    Convert(ConvertArgs),

    /// List the sheets of a workbook.
    Sheets(SheetsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Input spreadsheet (.csv, .xlsx, .xls, .xlsm, .xlsb, .ods).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Sheet to read from a workbook (default: first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// MER file mapping `Visible Number` to `Key/Card number`.
    #[arg(long = "lookup", value_name = "PATH")]
    pub lookup: Option<PathBuf>,

    /// Sheet to read from the lookup workbook (default: first sheet).
    #[arg(long = "lookup-sheet", value_name = "NAME")]
    pub lookup_sheet: Option<String>,

    /// TOML file with the column mapping.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Column holding the RFID/HEX value.
    #[arg(long = "rfid-column", value_name = "COLUMN", conflicts_with = "tag_column")]
    pub rfid_column: Option<String>,

    /// Column holding the TAGG ID (requires --lookup).
    #[arg(long = "tag-column", value_name = "COLUMN")]
    pub tag_column: Option<String>,

    /// Column written as Identifieringsnummer.
    #[arg(long = "id-column", value_name = "COLUMN")]
    pub id_column: Option<String>,

    /// Column naming the owning company; one file per company when set.
    #[arg(long = "company-column", value_name = "COLUMN")]
    pub company_column: Option<String>,

    /// Output directory (default: <INPUT dir>/output).
    ///
    /// Reports not produced by this run are removed from the directory;
    /// company files from earlier runs are kept.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Validate and report without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a JSON run summary to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SheetsArgs {
    /// Workbook to inspect.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
