//! REST client for the panel backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`, JSON in and out, Bearer
//! token when the session has one, aborted after [`REQUEST_TIMEOUT_MS`].
//! Native builds: every call returns [`ApiError::Unavailable`] so pages and
//! their pure helpers still compile and test off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] with the parsed body, so
//! the caller can surface the server's own message through
//! [`ApiError::user_message`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::types::{
    ApiCar, ApiMessage, ApiUser, CarForm, CarRow, Envelope, PasswordLoginData, SignupInput, UserForm, UserRow,
    UserUpdate, VerifyResponse,
};
use crate::config::PanelConfig;
use crate::state::session::SessionStore;
use crate::util::storage::SessionStorage;

pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, token: None }
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    /// Client for the configured backend, authenticated as the current session.
    #[must_use]
    pub fn for_session<S: SessionStorage>(config: &PanelConfig, session: &SessionStore<S>) -> Self {
        Self::new(config.api_base_url.as_str()).with_token(session.token().map(str::to_owned))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL with exactly one slash between them.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Authorization` header value, when a token is set.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Ask the backend to text a one-time code to `mobile`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn send_code(&self, mobile: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "mobile": mobile });
        self.request(HttpMethod::Post, "/resend-otp", Some(body)).await.map(drop)
    }

    /// Exchange a one-time code for a token. A missing body means "no token".
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the code is rejected.
    pub async fn verify_code(&self, mobile: &str, otp: &str) -> Result<VerifyResponse, ApiError> {
        let body = serde_json::json!({ "mobile": mobile, "otp": otp });
        let text = self.request(HttpMethod::Post, "/login", Some(body)).await?;
        Ok(decode::<Option<VerifyResponse>>(&text)?.unwrap_or_default())
    }

    /// Password login; returns the token from `data.token` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are rejected.
    pub async fn login_with_password(&self, mobile: &str, password: &str) -> Result<Option<String>, ApiError> {
        let body = serde_json::json!({ "mobile": mobile, "password": password });
        let text = self.request(HttpMethod::Post, "/login", Some(body)).await?;
        let envelope = decode::<Option<Envelope<PasswordLoginData>>>(&text)?;
        Ok(envelope.and_then(|e| e.data.token).filter(|t| !t.is_empty()))
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn signup(&self, input: &SignupInput) -> Result<(), ApiError> {
        self.request(HttpMethod::Post, "/signup", Some(to_body(input)?)).await.map(drop)
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a user list.
    pub async fn list_users(&self) -> Result<Vec<UserRow>, ApiError> {
        let text = self.request(HttpMethod::Get, "/user", None).await?;
        let envelope = decode::<Envelope<Vec<ApiUser>>>(&text)?;
        Ok(envelope.data.into_iter().map(UserRow::from).collect())
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the user does not exist.
    pub async fn get_user(&self, id: i64) -> Result<ApiUser, ApiError> {
        let text = self.request(HttpMethod::Get, &format!("/user/{id}"), None).await?;
        Ok(decode::<Envelope<ApiUser>>(&text)?.data)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the form.
    pub async fn create_user(&self, form: &UserForm) -> Result<Option<String>, ApiError> {
        self.mutate(HttpMethod::Post, "/user", Some(to_body(form)?)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the form.
    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<Option<String>, ApiError> {
        self.mutate(HttpMethod::Put, &format!("/user/{id}"), Some(to_body(update)?)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_user(&self, id: i64) -> Result<Option<String>, ApiError> {
        self.mutate(HttpMethod::Delete, &format!("/user/{id}"), None).await
    }

    /// Flip a user between active and inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn toggle_user(&self, id: i64) -> Result<Option<String>, ApiError> {
        self.mutate(HttpMethod::Get, &format!("/user/toggle/{id}"), None).await
    }

    // =========================================================================
    // Cars
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a car list.
    pub async fn list_cars(&self) -> Result<Vec<CarRow>, ApiError> {
        let text = self.request(HttpMethod::Get, "/car", None).await?;
        let envelope = decode::<Envelope<Vec<ApiCar>>>(&text)?;
        Ok(envelope.data.into_iter().map(CarRow::from).collect())
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the car does not exist.
    pub async fn get_car(&self, id: i64) -> Result<CarRow, ApiError> {
        let text = self.request(HttpMethod::Get, &format!("/car/{id}"), None).await?;
        Ok(decode::<Envelope<ApiCar>>(&text)?.data.into())
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the form.
    pub async fn create_car(&self, form: &CarForm) -> Result<Option<String>, ApiError> {
        self.mutate(HttpMethod::Post, "/car", Some(to_body(form)?)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the form.
    pub async fn update_car(&self, id: i64, form: &CarForm) -> Result<Option<String>, ApiError> {
        self.mutate(HttpMethod::Put, &format!("/car/{id}"), Some(to_body(form)?)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_car(&self, id: i64) -> Result<Option<String>, ApiError> {
        self.mutate(HttpMethod::Delete, &format!("/car/{id}"), None).await
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// Send a request whose response only matters for its optional message.
    async fn mutate(&self, method: HttpMethod, path: &str, body: Option<Value>) -> Result<Option<String>, ApiError> {
        let text = self.request(method, path, body).await?;
        // Some endpoints answer with an empty or non-object body on success.
        Ok(decode::<Option<ApiMessage>>(&text).ok().flatten().and_then(|m| m.message))
    }

    /// Send a request and return the raw success body.
    async fn request(&self, method: HttpMethod, path: &str, body: Option<Value>) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use std::cell::Cell;
            use std::rc::Rc;

            use gloo_net::http::Request;

            use super::error::parse_error_body;

            let url = self.endpoint(path);
            log::debug!("{} {url}", method.as_str());

            let mut builder = match method {
                HttpMethod::Get => Request::get(&url),
                HttpMethod::Post => Request::post(&url),
                HttpMethod::Put => Request::put(&url),
                HttpMethod::Delete => Request::delete(&url),
            }
            .header("Accept", "application/json");
            if let Some(auth) = self.authorization() {
                builder = builder.header("Authorization", &auth);
            }

            let controller = web_sys::AbortController::new().ok();
            let signal = controller.as_ref().map(web_sys::AbortController::signal);
            let timed_out = Rc::new(Cell::new(false));
            // Dropping the timer cancels it, so it must outlive the send.
            let _timer = controller.map(|controller| {
                let timed_out = Rc::clone(&timed_out);
                gloo_timers::callback::Timeout::new(REQUEST_TIMEOUT_MS, move || {
                    timed_out.set(true);
                    controller.abort();
                })
            });
            let builder = builder.abort_signal(signal.as_ref());

            let request = match body {
                Some(json) => builder.json(&json),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| {
                if timed_out.get() { ApiError::Timeout } else { ApiError::Network(e.to_string()) }
            })?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            if !resp.ok() {
                log::warn!("{} {url} failed: {status}", method.as_str());
                return Err(ApiError::Status { status, body: parse_error_body(&text) });
            }
            Ok(text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.token, body);
            log::debug!("{} {path}: http unavailable outside the browser", method.as_str());
            Err(ApiError::Unavailable)
        }
    }
}

fn to_body<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a success body; an empty body decodes as JSON `null`.
fn decode<R: DeserializeOwned>(text: &str) -> Result<R, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
