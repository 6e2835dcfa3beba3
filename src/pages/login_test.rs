use serde_json::json;

use super::*;
use crate::pages::MSG_INVALID_MOBILE;

#[test]
fn password_mode_requires_password() {
    assert_eq!(validate_login(LoginMode::Password, "09121234567", "  "), Err(MSG_PASSWORD_REQUIRED));
    assert_eq!(validate_login(LoginMode::Password, "09121234567", "secret"), Ok("09121234567".to_owned()));
}

#[test]
fn otp_mode_ignores_password() {
    assert_eq!(validate_login(LoginMode::Otp, "9121234567", ""), Ok("09121234567".to_owned()));
}

#[test]
fn mobile_is_checked_before_password() {
    assert_eq!(validate_login(LoginMode::Password, "123", ""), Err(MSG_INVALID_MOBILE));
}

#[test]
fn pending_code_402_redirects_to_otp() {
    let err = ApiError::Status { status: 402, body: Some(json!({ "data": { "redirect": "otp" } })) };
    assert!(redirects_to_otp(&err));
}

#[test]
fn other_failures_do_not_redirect() {
    assert!(!redirects_to_otp(&ApiError::Status { status: 402, body: None }));
    assert!(!redirects_to_otp(&ApiError::Status {
        status: 403,
        body: Some(json!({ "data": { "redirect": "otp" } })),
    }));
    assert!(!redirects_to_otp(&ApiError::Timeout));
}
