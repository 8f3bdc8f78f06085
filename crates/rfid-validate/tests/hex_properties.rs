use proptest::prelude::*;
use rfid_validate::{MAX_TAG_LEN, MIN_TAG_LEN, validate_hex};

proptest! {
    #[test]
    fn valid_tags_are_stable_under_revalidation(tag in "(0[xX])?[0-9a-fA-F]{6,10}") {
        let first = validate_hex(&tag);
        prop_assert!(first.is_valid);
        prop_assert_eq!(validate_hex(&first.normalized), first);
    }

    #[test]
    fn prefix_is_equivalent_to_bare_digits(digits in "[0-9a-fA-F]{0,14}") {
        prop_assert_eq!(validate_hex(&format!("0x{digits}")), validate_hex(&digits));
        prop_assert_eq!(validate_hex(&format!("0X{digits}")), validate_hex(&digits));
    }

    #[test]
    fn any_non_hex_character_is_rejected(
        head in "[0-9A-F]{0,8}",
        bad in "[G-WYZg-wyz!#%&*+/:;=?@_~-]",
        tail in "[0-9A-F]{0,8}"
    ) {
        let result = validate_hex(&format!("{head}{bad}{tail}"));
        prop_assert!(!result.is_valid);
    }

    #[test]
    fn validity_depends_only_on_length_for_hex(digits in "[0-9A-F]{1,16}") {
        let result = validate_hex(&digits);
        prop_assert_eq!(
            result.is_valid,
            (MIN_TAG_LEN..=MAX_TAG_LEN).contains(&digits.len())
        );
        prop_assert_eq!(result.normalized, digits);
    }

    #[test]
    fn surrounding_whitespace_is_ignored(digits in "[0-9a-f]{6,10}", pad in " {0,3}") {
        prop_assert_eq!(
            validate_hex(&format!("{pad}{digits}{pad}")),
            validate_hex(&digits)
        );
    }
}

#[test]
fn length_boundaries() {
    assert!(!validate_hex("12345").is_valid);
    assert!(validate_hex("123456").is_valid);
    assert!(validate_hex("1234567890").is_valid);
    assert!(!validate_hex("12345678901").is_valid);
}
