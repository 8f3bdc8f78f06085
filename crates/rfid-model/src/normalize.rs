//! Row normalizer: canonical text for raw cell values.
//!
//! Purely textual. Absent cells become `""`, everything else is stringified
//! and trimmed. No validation happens here.

use chrono::{NaiveDateTime, Timelike};

use crate::table::CellValue;

/// Largest magnitude at which an integral float still prints as an integer.
const INTEGRAL_FLOAT_LIMIT: f64 = 1e15;

/// Canonical text for a cell.
pub fn normalize_cell(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Text(text) => normalize_text(text),
        CellValue::Int(number) => number.to_string(),
        CellValue::Float(number) => format_float(*number),
        CellValue::Bool(true) => "True".to_string(),
        CellValue::Bool(false) => "False".to_string(),
        CellValue::DateTime(datetime) => format_datetime(datetime),
    }
}

/// Canonical text for an optional cell; `None` behaves like an empty cell.
pub fn normalize_optional(value: Option<&CellValue>) -> String {
    value.map(normalize_cell).unwrap_or_default()
}

/// Trim surrounding whitespace and any stray byte-order mark.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn format_float(number: f64) -> String {
    if number.is_nan() {
        return String::new();
    }
    if number.fract() == 0.0 && number.abs() < INTEGRAL_FLOAT_LIMIT {
        // Spreadsheets store every number as a float; keep 12345678 as 12345678.
        return format!("{}", number as i64);
    }
    number.to_string()
}

fn format_datetime(datetime: &NaiveDateTime) -> String {
    if datetime.num_seconds_from_midnight() == 0 && datetime.nanosecond() == 0 {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn empty_and_whitespace_normalize_to_empty() {
        assert_eq!(normalize_cell(&CellValue::Empty), "");
        assert_eq!(normalize_cell(&CellValue::Text("   ".to_string())), "");
        assert_eq!(normalize_optional(None), "");
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(normalize_cell(&CellValue::Text("  ABC 123 \t".to_string())), "ABC 123");
        assert_eq!(normalize_text("\u{feff}RFID"), "RFID");
    }

    #[test]
    fn numbers_are_stringified() {
        assert_eq!(normalize_cell(&CellValue::Int(42)), "42");
        assert_eq!(normalize_cell(&CellValue::Float(12345678.0)), "12345678");
        assert_eq!(normalize_cell(&CellValue::Float(-3.0)), "-3");
        assert_eq!(normalize_cell(&CellValue::Float(2.5)), "2.5");
        assert_eq!(normalize_cell(&CellValue::Float(f64::NAN)), "");
    }

    #[test]
    fn booleans_and_dates_are_stringified() {
        assert_eq!(normalize_cell(&CellValue::Bool(true)), "True");
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let midnight = date.and_hms_opt(0, 0, 0).unwrap();
        let afternoon = date.and_hms_opt(14, 30, 5).unwrap();
        assert_eq!(normalize_cell(&CellValue::DateTime(midnight)), "2024-03-05");
        assert_eq!(
            normalize_cell(&CellValue::DateTime(afternoon)),
            "2024-03-05 14:30:05"
        );
    }
}
