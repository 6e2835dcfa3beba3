use serde_json::json;

use super::*;

fn api_user(value: serde_json::Value) -> ApiUser {
    serde_json::from_value(value).unwrap()
}

#[test]
fn api_user_reads_backend_field_names() {
    let user = api_user(json!({
        "id": 7,
        "name": "علی",
        "family": null,
        "mobile": "09120000000",
        "father_name": "رضا",
        "nationalID": "0012345678",
        "status": true,
        "mobile_verify_at": null,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-02T00:00:00Z"
    }));
    assert_eq!(user.id, 7);
    assert_eq!(user.national_id.as_deref(), Some("0012345678"));
    assert!(user.status);
}

#[test]
fn api_user_status_accepts_numeric_and_string_flags() {
    let base = |status: serde_json::Value| json!({ "id": 1, "name": "n", "mobile": "m", "status": status });
    assert!(api_user(base(json!(1))).status);
    assert!(!api_user(base(json!(0))).status);
    assert!(api_user(base(json!("1"))).status);
    assert!(!api_user(base(json!(null))).status);
    assert!(serde_json::from_value::<ApiUser>(base(json!("maybe"))).is_err());
}

#[test]
fn user_row_defaults_family_and_labels_status() {
    let row = UserRow::from(api_user(json!({ "id": 1, "name": "n", "mobile": "m", "status": 0 })));
    assert_eq!(row.family, "-");
    assert_eq!(row.status_label(), STATUS_INACTIVE);
    assert_eq!(row.field("status"), CellValue::from(STATUS_INACTIVE));
}

#[test]
fn user_row_fields_and_key() {
    let row = UserRow {
        id: 3,
        name: "سارا".to_owned(),
        family: "محمدی".to_owned(),
        mobile: "09123334444".to_owned(),
        father_name: None,
        national_id: Some("123".to_owned()),
        active: true,
    };
    assert_eq!(row.field("id"), CellValue::Int(3));
    assert_eq!(row.field("father_name"), CellValue::Empty);
    assert_eq!(row.field("national_id"), CellValue::from("123"));
    assert_eq!(row.field("actions"), CellValue::Empty);
    assert_eq!(row.record_key(), "3");
}

#[test]
fn user_form_serializes_national_id_name() {
    let form = UserForm { national_id: "99".to_owned(), ..UserForm::default() };
    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(value["nationalID"], json!("99"));
    assert!(value.get("national_id").is_none());
}

#[test]
fn user_form_prefills_from_api_user_without_password() {
    let user = api_user(json!({
        "id": 9,
        "name": "سارا",
        "family": null,
        "mobile": "09351234567",
        "father_name": "علی",
        "nationalID": "0012345678",
        "status": true
    }));
    let form = UserForm::from(&user);
    assert_eq!(form.name, "سارا");
    assert_eq!(form.family, "");
    assert_eq!(form.father_name, "علی");
    assert_eq!(form.national_id, "0012345678");
    assert!(form.password.is_empty() && form.confirm_password.is_empty());
}

#[test]
fn user_update_omits_missing_password_pair() {
    let update = UserUpdate { name: "a".to_owned(), national_id: "1".to_owned(), ..UserUpdate::default() };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value["nationalID"], json!("1"));
    assert!(value.get("password").is_none());
    assert!(value.get("confirm_password").is_none());

    let update = UserUpdate { password: Some("abcd".to_owned()), confirm_password: Some("abcd".to_owned()), ..update };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value["password"], json!("abcd"));
    assert_eq!(value["confirm_password"], json!("abcd"));
}

#[test]
fn car_envelope_maps_to_rows() {
    let envelope: Envelope<Vec<ApiCar>> =
        serde_json::from_value(json!({ "data": [{ "id": 1, "name": "پژو ۲۰۶" }], "message": "ok" })).unwrap();
    let rows: Vec<CarRow> = envelope.data.into_iter().map(CarRow::from).collect();
    assert_eq!(rows, vec![CarRow { id: 1, name: "پژو ۲۰۶".to_owned() }]);
    assert_eq!(rows[0].field("name"), CellValue::from("پژو ۲۰۶"));
}

#[test]
fn verify_response_tolerates_missing_fields() {
    let resp: VerifyResponse = serde_json::from_value(json!({})).unwrap();
    assert_eq!(resp, VerifyResponse::default());
    let resp: VerifyResponse = serde_json::from_value(json!({ "need_signup": true })).unwrap();
    assert!(resp.need_signup);
}
