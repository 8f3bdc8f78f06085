//! Per-company CSV serialization.

use std::collections::HashSet;

use csv::{Terminator, WriterBuilder};
use rfid_model::{Company, CompanyBucket};

use crate::error::{OutputError, Result};
use crate::report::{ERROR_REPORT_FILENAME, WARNING_REPORT_FILENAME};
use crate::sanitize::sanitize_filename;

/// UTF-8 byte-order mark written at the start of every CSV file.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header row of a company file.
pub const COMPANY_HEADER: [&str; 2] = ["RFID", "Identifieringsnummer"];

/// Filename stem used when no company column is configured.
const ALL_COMPANIES_STEM: &str = "output";

/// What a generated file contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    Company(Company),
    ErrorReport,
    WarningReport,
}

/// A generated file held in memory until written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    pub filename: String,
    pub kind: FileKind,
    /// Data rows, header excluded.
    pub row_count: usize,
    pub bytes: Vec<u8>,
}

impl CsvFile {
    pub fn company(&self) -> Option<&Company> {
        match &self.kind {
            FileKind::Company(company) => Some(company),
            _ => None,
        }
    }
}

/// Serialize one bucket as `RFID;Identifieringsnummer` with a BOM.
///
/// Rows keep bucket order; a tag seen earlier in the bucket is skipped.
/// Returns the bytes and the number of data rows written.
pub fn emit_company_csv(bucket: &CompanyBucket) -> Result<(Vec<u8>, usize)> {
    let target = format!("CSV for company {}", bucket.company);
    let mut writer = semicolon_writer();
    writer
        .write_record(COMPANY_HEADER)
        .map_err(|source| OutputError::Csv {
            target: target.clone(),
            source,
        })?;

    let mut seen: HashSet<&str> = HashSet::with_capacity(bucket.len());
    let mut written = 0usize;
    for row in &bucket.rows {
        if !seen.insert(row.clean_tag.as_str()) {
            continue;
        }
        writer
            .write_record([row.clean_tag.as_str(), row.business_id.as_str()])
            .map_err(|source| OutputError::Csv {
                target: target.clone(),
                source,
            })?;
        written += 1;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| OutputError::Buffer {
            target,
            source: err.into_error(),
        })?;
    Ok((bytes, written))
}

/// Serialize every bucket and assign each a unique filename.
///
/// The `Alla` bucket is named `output.csv`; other companies use their
/// sanitized name. A name that sanitizes to nothing falls back to
/// `Utan_foretag`, and clashing names get `_2`, `_3`, ... suffixes. The
/// report filenames are reserved, so a company never takes one of them.
pub fn emit_company_files(buckets: &[CompanyBucket]) -> Result<Vec<CsvFile>> {
    let mut used: HashSet<String> = [ERROR_REPORT_FILENAME, WARNING_REPORT_FILENAME]
        .iter()
        .map(|name| name.to_lowercase())
        .collect();
    let mut files = Vec::with_capacity(buckets.len());

    for bucket in buckets {
        let (bytes, row_count) = emit_company_csv(bucket)?;
        let filename = unique_filename(&company_file_stem(&bucket.company), &mut used);
        tracing::debug!(
            filename = %filename,
            rows = row_count,
            dropped_duplicates = bucket.len() - row_count,
            "company file serialized"
        );
        files.push(CsvFile {
            filename,
            kind: FileKind::Company(bucket.company.clone()),
            row_count,
            bytes,
        });
    }
    Ok(files)
}

/// Filename for a company's file, before collision handling.
pub fn company_filename(company: &Company) -> String {
    format!("{}.csv", company_file_stem(company))
}

fn company_file_stem(company: &Company) -> String {
    match company {
        Company::All => ALL_COMPANIES_STEM.to_string(),
        other => {
            let stem = sanitize_filename(other.label());
            if stem.is_empty() {
                Company::UNSPECIFIED_LABEL.to_string()
            } else {
                stem
            }
        }
    }
}

/// Comparison is case-insensitive so files stay distinct on
/// case-insensitive filesystems.
fn unique_filename(stem: &str, used: &mut HashSet<String>) -> String {
    let mut candidate = format!("{stem}.csv");
    let mut suffix = 2usize;
    while !used.insert(candidate.to_lowercase()) {
        candidate = format!("{stem}_{suffix}.csv");
        suffix += 1;
    }
    candidate
}

fn semicolon_writer() -> csv::Writer<Vec<u8>> {
    WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::Any(b'\n'))
        .from_writer(UTF8_BOM.to_vec())
}

#[cfg(test)]
mod tests {
    use rfid_model::ResolvedRow;

    use super::*;

    fn bucket(company: Company, rows: &[(&str, &str)]) -> CompanyBucket {
        CompanyBucket {
            company,
            rows: rows
                .iter()
                .enumerate()
                .map(|(index, &(tag, id))| ResolvedRow {
                    index,
                    raw_tag: tag.to_string(),
                    clean_tag: tag.to_string(),
                    tag_valid: true,
                    business_id: id.to_string(),
                    company: Company::All,
                })
                .collect(),
        }
    }

    #[test]
    fn emits_bom_header_and_keeps_first_duplicate() {
        let (bytes, rows) = emit_company_csv(&bucket(
            Company::Named("X".to_string()),
            &[("1A2B3C4D", "ABC123"), ("1A2B3C4D", "DUP")],
        ))
        .unwrap();
        assert_eq!(rows, 1);
        assert!(bytes.starts_with(UTF8_BOM));
        let text = std::str::from_utf8(&bytes[UTF8_BOM.len()..]).unwrap();
        insta::assert_snapshot!(text.trim_end(), @r"
        RFID;Identifieringsnummer
        1A2B3C4D;ABC123
        ");
    }

    #[test]
    fn empty_business_id_is_written_as_empty_field() {
        let (bytes, _) =
            emit_company_csv(&bucket(Company::All, &[("AABBCCDD", "")])).unwrap();
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text, "RFID;Identifieringsnummer\nAABBCCDD;\n");
    }

    #[test]
    fn filenames_for_sentinels_and_named_companies() {
        assert_eq!(company_filename(&Company::All), "output.csv");
        assert_eq!(company_filename(&Company::Unspecified), "Utan_foretag.csv");
        assert_eq!(
            company_filename(&Company::Named("Bolag Å&Ö".to_string())),
            "Bolag_A_O.csv"
        );
        assert_eq!(
            company_filename(&Company::Named("???".to_string())),
            "Utan_foretag.csv"
        );
    }

    #[test]
    fn colliding_filenames_get_numeric_suffix() {
        let files = emit_company_files(&[
            bucket(Company::Named("A&B".to_string()), &[("AAAAAA", "1")]),
            bucket(Company::Named("A/B".to_string()), &[("BBBBBB", "2")]),
            bucket(Company::Named("a b".to_string()), &[("CCCCCC", "3")]),
        ])
        .unwrap();
        let names: Vec<&str> = files.iter().map(|file| file.filename.as_str()).collect();
        assert_eq!(names, vec!["A_B.csv", "A_B_2.csv", "a_b_3.csv"]);
    }

    #[test]
    fn company_named_like_a_report_is_suffixed() {
        let files = emit_company_files(&[
            bucket(Company::Named("Varningar".to_string()), &[("AAAAAA", "1")]),
            bucket(Company::Named("felrapport".to_string()), &[("BBBBBB", "2")]),
        ])
        .unwrap();
        let names: Vec<&str> = files.iter().map(|file| file.filename.as_str()).collect();
        assert_eq!(names, vec!["Varningar_2.csv", "felrapport_2.csv"]);
    }
}
