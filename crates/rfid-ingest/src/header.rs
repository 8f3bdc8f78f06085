//! Header row cleanup shared by the CSV and workbook readers.

use std::collections::BTreeMap;

/// Trim, drop a stray BOM and collapse internal whitespace runs.
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Turn raw header cells into unique, non-empty column names.
///
/// Blank headers become `Unnamed: <index>`; repeated names get `.1`, `.2`, ...
/// appended in order of appearance.
pub(crate) fn build_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    let mut headers = Vec::new();
    for (index, cell) in raw.into_iter().enumerate() {
        let mut name = normalize_header(cell.as_ref());
        if name.is_empty() {
            name = format!("Unnamed: {index}");
        }
        let count = seen.entry(name.clone()).or_insert(0);
        if *count > 0 {
            let base = name.clone();
            name = format!("{base}.{count}");
        }
        *count += 1;
        headers.push(name);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_whitespace_and_bom() {
        assert_eq!(normalize_header("\u{feff}  Key/Card   number "), "Key/Card number");
    }

    #[test]
    fn names_blank_and_duplicate_headers() {
        let headers = build_headers(["RFID", "", "RFID", "Regnr", "RFID"]);
        assert_eq!(
            headers,
            vec!["RFID", "Unnamed: 1", "RFID.1", "Regnr", "RFID.2"]
        );
    }
}
