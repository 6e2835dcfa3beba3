//! REST DTOs for the panel API and the row models shown in list screens.
//!
//! DESIGN
//! ======
//! `Api*` types mirror the backend JSON; `*Row` types are the display models
//! handed to the data table. Keeping them apart lets the backend add fields
//! without touching column definitions.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use datatable::{CellValue, Record};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub const STATUS_ACTIVE: &str = "فعال";
pub const STATUS_INACTIVE: &str = "غیرفعال";

/// Standard `{ data, message }` response wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of `POST /login` with an OTP.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub need_signup: bool,
}

/// `data` of `POST /login` with a password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordLoginData {
    #[serde(default)]
    pub token: Option<String>,
}

/// User as returned by `GET /user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub family: Option<String>,
    pub mobile: String,
    #[serde(default)]
    pub father_name: Option<String>,
    #[serde(default, rename = "nationalID")]
    pub national_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub status: bool,
    #[serde(default)]
    pub mobile_verify_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Display model for the users table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub family: String,
    pub mobile: String,
    pub father_name: Option<String>,
    pub national_id: Option<String>,
    pub active: bool,
}

impl UserRow {
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        status_label(self.active)
    }
}

impl From<ApiUser> for UserRow {
    fn from(user: ApiUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            family: user.family.filter(|f| !f.trim().is_empty()).unwrap_or_else(|| "-".to_owned()),
            mobile: user.mobile,
            father_name: user.father_name,
            national_id: user.national_id,
            active: user.status,
        }
    }
}

impl Record for UserRow {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "family" => self.family.as_str().into(),
            "mobile" => self.mobile.as_str().into(),
            "father_name" => self.father_name.clone().into(),
            "national_id" => self.national_id.clone().into(),
            "status" => self.status_label().into(),
            _ => CellValue::Empty,
        }
    }

    fn record_key(&self) -> String {
        self.id.to_string()
    }
}

#[must_use]
pub fn status_label(active: bool) -> &'static str {
    if active { STATUS_ACTIVE } else { STATUS_INACTIVE }
}

/// Payload for creating a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub family: String,
    #[serde(rename = "nationalID")]
    pub national_id: String,
    pub father_name: String,
    pub mobile: String,
    pub password: String,
    pub confirm_password: String,
}

impl From<&ApiUser> for UserForm {
    /// Prefill the edit form; password fields start blank.
    fn from(user: &ApiUser) -> Self {
        Self {
            name: user.name.clone(),
            family: user.family.clone().unwrap_or_default(),
            national_id: user.national_id.clone().unwrap_or_default(),
            father_name: user.father_name.clone().unwrap_or_default(),
            mobile: user.mobile.clone(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

/// Body of `PUT /user/{id}`. The password pair is only sent when a new
/// password was entered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub family: String,
    #[serde(rename = "nationalID")]
    pub national_id: String,
    pub father_name: String,
    pub mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

/// Car as returned by `GET /car`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCar {
    pub id: i64,
    pub name: String,
}

/// Display model for the cars table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarRow {
    pub id: i64,
    pub name: String,
}

impl From<ApiCar> for CarRow {
    fn from(car: ApiCar) -> Self {
        Self { id: car.id, name: car.name }
    }
}

impl Record for CarRow {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            _ => CellValue::Empty,
        }
    }

    fn record_key(&self) -> String {
        self.id.to_string()
    }
}

/// Payload for creating or renaming a car.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarForm {
    pub name: String,
}

/// Accept `true`/`false`, `0`/`1`, or `"0"`/`"1"` (backends disagree).
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        serde_json::Value::String(text) => match text.trim() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!("invalid status flag: {other}"))),
        },
        other => Err(D::Error::custom(format!("invalid status flag: {other}"))),
    }
}

/// Body of `POST /signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupInput {
    pub mobile: String,
    pub name: String,
    pub password: String,
}

/// Mutation responses only carry an optional confirmation message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
