use serde_json::json;

use super::*;

fn status(code: u16, body: Option<Value>) -> ApiError {
    ApiError::Status { status: code, body }
}

// =============================================================
// Fallback messages per status
// =============================================================

#[test]
fn fallback_messages_by_status() {
    assert_eq!(status(401, None).user_message(), MSG_UNAUTHORIZED);
    assert_eq!(status(402, None).user_message(), MSG_PAYMENT_REQUIRED);
    assert_eq!(status(403, None).user_message(), MSG_FORBIDDEN);
    assert_eq!(status(404, None).user_message(), MSG_NOT_FOUND);
    assert_eq!(status(429, None).user_message(), MSG_RATE_LIMITED);
    assert_eq!(status(500, None).user_message(), MSG_SERVER);
    assert_eq!(status(503, None).user_message(), MSG_SERVER);
    assert_eq!(status(422, None).user_message(), MSG_BAD_REQUEST);
}

#[test]
fn transport_failures_map_to_offline_or_timeout() {
    assert_eq!(ApiError::Network("boom".to_owned()).user_message(), MSG_OFFLINE);
    assert_eq!(ApiError::Timeout.user_message(), MSG_TIMEOUT);
    assert_eq!(ApiError::Timeout.code(), Some("TIMEOUT".to_owned()));
}

// =============================================================
// Server-supplied messages
// =============================================================

#[test]
fn server_message_wins_over_fallback() {
    let err = status(422, Some(json!({ "message": "شماره موبایل تکراری است" })));
    assert_eq!(err.user_message(), "شماره موبایل تکراری است");
}

#[test]
fn server_message_checks_error_then_detail() {
    assert_eq!(status(400, Some(json!({ "error": "bad otp" }))).user_message(), "bad otp");
    assert_eq!(status(400, Some(json!({ "detail": "nope" }))).user_message(), "nope");
}

#[test]
fn plain_text_body_is_the_message() {
    let err = status(500, parse_error_body("gateway exploded"));
    assert_eq!(err.user_message(), "gateway exploded");
}

#[test]
fn code_comes_from_body_or_402_default() {
    assert_eq!(status(403, Some(json!({ "code": "LOCKED" }))).code(), Some("LOCKED".to_owned()));
    assert_eq!(status(402, None).code(), Some("402".to_owned()));
    assert_eq!(status(404, None).code(), None);
}

#[test]
fn unauthorized_is_detected() {
    assert!(status(401, None).is_unauthorized());
    assert!(!status(403, None).is_unauthorized());
    assert!(!ApiError::Timeout.is_unauthorized());
}

#[test]
fn parse_error_body_handles_json_text_and_empty() {
    assert_eq!(parse_error_body("{\"message\":\"x\"}"), Some(json!({ "message": "x" })));
    assert_eq!(parse_error_body("oops"), Some(json!("oops")));
    assert_eq!(parse_error_body("  "), None);
}
