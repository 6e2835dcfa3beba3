use super::*;

#[test]
fn valid_signup_trims_name() {
    let input = validate_signup(Some("09121234567"), "  مریم ", "123456").unwrap();
    assert_eq!(
        input,
        SignupInput { mobile: "09121234567".to_owned(), name: "مریم".to_owned(), password: "123456".to_owned() }
    );
}

#[test]
fn password_length_counts_characters() {
    assert_eq!(validate_signup(Some("0912"), "a", "۱۲۳۴۵"), Err(MSG_SIGNUP_INVALID));
    assert!(validate_signup(Some("0912"), "a", "۱۲۳۴۵۶").is_ok());
}

#[test]
fn missing_mobile_or_name_is_rejected() {
    assert_eq!(validate_signup(None, "a", "123456"), Err(MSG_INVALID_MOBILE));
    assert_eq!(validate_signup(Some(""), "a", "123456"), Err(MSG_INVALID_MOBILE));
    assert_eq!(validate_signup(Some("0912"), " ", "123456"), Err(MSG_SIGNUP_INVALID));
}
