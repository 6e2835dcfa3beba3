use serde_json::json;

use super::*;
use crate::state::session::IdentifierUpdate;
use crate::util::storage::MemoryStorage;

#[test]
fn endpoint_joins_with_single_slash() {
    let client = ApiClient::new("https://api.example.ir/api/");
    assert_eq!(client.base_url(), "https://api.example.ir/api");
    assert_eq!(client.endpoint("/user"), "https://api.example.ir/api/user");
    assert_eq!(client.endpoint("car/3"), "https://api.example.ir/api/car/3");
}

#[test]
fn relative_base_url_is_kept() {
    assert_eq!(ApiClient::new("/api").endpoint("/login"), "/api/login");
}

#[test]
fn authorization_is_bearer_token_when_present() {
    let client = ApiClient::new("/api");
    assert_eq!(client.authorization(), None);
    let client = client.with_token(Some("abc".to_owned()));
    assert_eq!(client.authorization(), Some("Bearer abc".to_owned()));
    assert_eq!(client.with_token(Some(String::new())).authorization(), None);
}

#[test]
fn for_session_uses_config_and_session_token() {
    let config = PanelConfig::from_vars(Some("https://x.ir/api"), None);
    let mut session = SessionStore::load(MemoryStorage::new());
    assert_eq!(ApiClient::for_session(&config, &session).authorization(), None);

    session.set_session(Some("tok".to_owned()), IdentifierUpdate::Keep);
    let client = ApiClient::for_session(&config, &session);
    assert_eq!(client.base_url(), "https://x.ir/api");
    assert_eq!(client.authorization(), Some("Bearer tok".to_owned()));
}

#[test]
fn method_names() {
    assert_eq!(HttpMethod::Get.as_str(), "GET");
    assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
}

#[test]
fn decode_treats_empty_body_as_null() {
    assert_eq!(decode::<Option<VerifyResponse>>("").unwrap(), None);
    assert_eq!(decode::<Option<ApiMessage>>("  ").unwrap(), None);
}

#[test]
fn decode_reports_malformed_json() {
    let err = decode::<Envelope<Vec<ApiCar>>>("{\"data\": 5}").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn to_body_serializes_forms() {
    let body = to_body(&CarForm { name: "پراید".to_owned() }).unwrap();
    assert_eq!(body, json!({ "name": "پراید" }));
}

#[test]
fn single_user_envelope_decodes() {
    let text = r#"{"data": {"id": 4, "name": "رضا", "mobile": "09121234567", "status": 1}}"#;
    let user = decode::<Envelope<ApiUser>>(text).unwrap().data;
    assert_eq!(user.id, 4);
    assert!(user.status);
}
