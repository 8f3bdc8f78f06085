//! RFID/HEX tag validation.

/// Shortest accepted tag, in hex digits.
pub const MIN_TAG_LEN: usize = 6;
/// Longest accepted tag, in hex digits.
pub const MAX_TAG_LEN: usize = 10;

/// Outcome of [`validate_hex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexValidation {
    pub is_valid: bool,
    /// Trimmed, uppercased, `0X`-stripped candidate. Also returned for
    /// invalid input so it can be shown in diagnostics.
    pub normalized: String,
}

impl HexValidation {
    fn invalid(normalized: String) -> Self {
        Self {
            is_valid: false,
            normalized,
        }
    }
}

/// Classify and normalize a candidate tag identifier.
///
/// Valid tags are 6 to 10 characters of `0-9A-F` after trimming,
/// uppercasing and removing one leading `0X`.
pub fn validate_hex(candidate: &str) -> HexValidation {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return HexValidation::invalid(String::new());
    }

    let upper = trimmed.to_uppercase();
    let normalized = upper.strip_prefix("0X").unwrap_or(&upper).to_string();

    if normalized.is_empty() || !normalized.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return HexValidation::invalid(normalized);
    }
    if !(MIN_TAG_LEN..=MAX_TAG_LEN).contains(&normalized.len()) {
        return HexValidation::invalid(normalized);
    }

    HexValidation {
        is_valid: true,
        normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_prefixed_tags() {
        assert_eq!(
            validate_hex("1A2B3C4D"),
            HexValidation {
                is_valid: true,
                normalized: "1A2B3C4D".to_string()
            }
        );
        assert_eq!(validate_hex("0x1a2b3c4d"), validate_hex("1A2B3C4D"));
        assert_eq!(validate_hex("  0X1A2B3C4D "), validate_hex("1A2B3C4D"));
    }

    #[test]
    fn empty_input_is_invalid_with_empty_normalization() {
        assert_eq!(validate_hex(""), HexValidation::invalid(String::new()));
        assert_eq!(validate_hex("   "), HexValidation::invalid(String::new()));
    }

    #[test]
    fn rejects_non_hex_but_returns_normalized_text() {
        let result = validate_hex("zzz");
        assert!(!result.is_valid);
        assert_eq!(result.normalized, "ZZZ");

        let result = validate_hex("1A2B-3C4D");
        assert!(!result.is_valid);
        assert_eq!(result.normalized, "1A2B-3C4D");
    }

    #[test]
    fn bare_prefix_is_invalid() {
        let result = validate_hex("0x");
        assert!(!result.is_valid);
        assert_eq!(result.normalized, "");
    }

    #[test]
    fn length_boundaries_are_inclusive() {
        assert!(!validate_hex("ABCDE").is_valid);
        assert!(validate_hex("ABCDEF").is_valid);
        assert!(validate_hex("ABCDEF0123").is_valid);
        assert!(!validate_hex("ABCDEF01234").is_valid);
    }

    #[test]
    fn only_a_leading_prefix_is_stripped() {
        let result = validate_hex("AB0XCD12");
        assert!(!result.is_valid);
        assert_eq!(result.normalized, "AB0XCD12");
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        // Fullwidth digits uppercase to themselves and are not hex.
        assert!(!validate_hex("１２３４５６").is_valid);
    }
}
