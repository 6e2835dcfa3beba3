use super::*;

#[test]
fn normalize_strips_formatting() {
    assert_eq!(normalize_iran_mobile("0912 000-0000"), "09120000000");
}

#[test]
fn normalize_rewrites_country_prefixes() {
    assert_eq!(normalize_iran_mobile("+98 912 000 0000"), "09120000000");
    assert_eq!(normalize_iran_mobile("00989120000000"), "09120000000");
}

#[test]
fn normalize_adds_leading_zero_to_bare_number() {
    assert_eq!(normalize_iran_mobile("9120000000"), "09120000000");
}

#[test]
fn normalize_leaves_other_digits_alone() {
    assert_eq!(normalize_iran_mobile("12345"), "12345");
    assert_eq!(normalize_iran_mobile(""), "");
}

#[test]
fn valid_mobile_shape() {
    assert!(is_valid_iran_mobile("09120000000"));
    assert!(!is_valid_iran_mobile("9120000000"));
    assert!(!is_valid_iran_mobile("0812000000a"));
    assert!(!is_valid_iran_mobile("091200000001"));
}
