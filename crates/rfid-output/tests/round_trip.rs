use std::fs;

use rfid_model::{Company, CompanyBucket, ResolvedRow};
use rfid_output::{UTF8_BOM, emit_company_files, write_outputs};

fn row(index: usize, tag: &str, business_id: &str, company: &Company) -> ResolvedRow {
    ResolvedRow {
        index,
        raw_tag: tag.to_string(),
        clean_tag: tag.to_string(),
        tag_valid: true,
        business_id: business_id.to_string(),
        company: company.clone(),
    }
}

fn read_pairs(bytes: &[u8]) -> Vec<(String, String)> {
    let body = bytes.strip_prefix(UTF8_BOM).expect("BOM prefix");
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(body);
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["RFID", "Identifieringsnummer"]);
    reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            (record[0].to_string(), record[1].to_string())
        })
        .collect()
}

#[test]
fn written_files_parse_back_to_the_same_pairs() {
    let acme = Company::Named("Åkeri & Co".to_string());
    let buckets = vec![
        CompanyBucket {
            company: acme.clone(),
            rows: vec![
                row(0, "AABBCC01", "ABC 123", &acme),
                row(2, "AABBCC02", "semi;colon", &acme),
                row(3, "AABBCC01", "LATER", &acme),
                row(5, "AABBCC03", "quote\"d", &acme),
            ],
        },
        CompanyBucket {
            company: Company::Unspecified,
            rows: vec![row(1, "DDEEFF00", "X1", &Company::Unspecified)],
        },
    ];

    let files = emit_company_files(&buckets).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let paths = write_outputs(&out, &files).unwrap();

    let names: Vec<String> = paths
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["Akeri_Co.csv", "Utan_foretag.csv"]);

    let acme_pairs = read_pairs(&fs::read(&paths[0]).unwrap());
    assert_eq!(
        acme_pairs,
        vec![
            ("AABBCC01".to_string(), "ABC 123".to_string()),
            ("AABBCC02".to_string(), "semi;colon".to_string()),
            ("AABBCC03".to_string(), "quote\"d".to_string()),
        ]
    );
    assert_eq!(files[0].row_count, 3);
    assert_eq!(files[0].company(), Some(&acme));

    let unspecified = read_pairs(&fs::read(&paths[1]).unwrap());
    assert_eq!(unspecified, vec![("DDEEFF00".to_string(), "X1".to_string())]);
}

#[test]
fn nothing_is_written_for_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty");
    let paths = write_outputs(&out, &[]).unwrap();
    assert!(paths.is_empty());
    assert!(out.is_dir());
}
