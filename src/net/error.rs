//! HTTP failure taxonomy and user-facing (Persian) messages.
//!
//! ERROR HANDLING
//! ==============
//! Pages never show raw transport errors. They call
//! [`ApiError::user_message`], which prefers a message supplied by the server
//! and otherwise falls back to a fixed message per status class.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

pub const MSG_TIMEOUT: &str = "پاسخ‌گویی سرور بیش از حد طول کشید";
pub const MSG_OFFLINE: &str = "اتصال شما به اینترنت برقرار نیست";
pub const MSG_PAYMENT_REQUIRED: &str = "دسترسی به ارسال کد محدود است";
pub const MSG_UNAUTHORIZED: &str = "نیاز به ورود دارید";
pub const MSG_FORBIDDEN: &str = "دسترسی غیرمجاز";
pub const MSG_NOT_FOUND: &str = "منبع مورد نظر پیدا نشد";
pub const MSG_RATE_LIMITED: &str = "درخواست‌های زیاد؛ لطفاً بعداً تلاش کنید";
pub const MSG_SERVER: &str = "خطای داخلی سرور";
pub const MSG_BAD_REQUEST: &str = "درخواست نامعتبر است";
pub const MSG_BAD_RESPONSE: &str = "پاسخ سرور قابل پردازش نیست";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    /// Non-2xx response; `body` is the parsed JSON (or a JSON string holding
    /// the raw text) when the server sent one.
    #[error("http status {status}")]
    Status { status: u16, body: Option<Value> },
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Machine-readable code: the body's `code` field for status errors,
    /// `TIMEOUT` for timeouts.
    #[must_use]
    pub fn code(&self) -> Option<String> {
        match self {
            Self::Timeout => Some("TIMEOUT".to_owned()),
            Self::Status { status, body } => body
                .as_ref()
                .and_then(|b| b.get("code"))
                .map(|c| c.as_str().map_or_else(|| c.to_string(), str::to_owned))
                .or_else(|| (*status == 402).then(|| "402".to_owned())),
            _ => None,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Timeout => MSG_TIMEOUT.to_owned(),
            Self::Network(_) | Self::Unavailable => MSG_OFFLINE.to_owned(),
            Self::Decode(_) => MSG_BAD_RESPONSE.to_owned(),
            Self::Status { status, body } => body
                .as_ref()
                .and_then(server_message)
                .unwrap_or_else(|| fallback_message(*status).to_owned()),
        }
    }
}

/// Message carried by the body: a plain string, or `message`, `error`,
/// `detail` in that order.
fn server_message(body: &Value) -> Option<String> {
    if let Some(text) = body.as_str() {
        return Some(text.to_owned()).filter(|t| !t.is_empty());
    }
    ["message", "error", "detail"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_owned)
}

fn fallback_message(status: u16) -> &'static str {
    match status {
        401 => MSG_UNAUTHORIZED,
        402 => MSG_PAYMENT_REQUIRED,
        403 => MSG_FORBIDDEN,
        404 => MSG_NOT_FOUND,
        429 => MSG_RATE_LIMITED,
        s if s >= 500 => MSG_SERVER,
        _ => MSG_BAD_REQUEST,
    }
}

/// Parse an error body: JSON when possible, else the raw text as a JSON
/// string, `None` when empty.
#[must_use]
pub fn parse_error_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned())))
}
