//! Top-level route page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own their async fetches and form state. Auth pages write the session
//! store; dashboard pages sit behind `RequireAuth` and feed list tables.

pub mod cars;
pub mod dashboard;
pub mod login;
pub mod otp;
pub mod phone;
pub mod signup;
pub mod users;

use leptos::prelude::*;

use crate::config::PanelConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::session::PanelSession;
use crate::state::ui::UiState;

pub const MSG_INVALID_MOBILE: &str = "شماره موبایل معتبر نیست";
pub const MSG_PASSWORD_REQUIRED: &str = "رمز عبور را وارد کنید";
pub const MSG_LOGIN_FAILED: &str = "ورود ناموفق. لطفاً اطلاعات را بررسی کنید";
pub const MSG_INVALID_OTP: &str = "کد تایید معتبر نیست";

/// Context handles every page needs, gathered once at setup so event
/// handlers and spawned tasks can copy them around.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub session: RwSignal<PanelSession>,
    pub ui: RwSignal<UiState>,
    config: StoredValue<PanelConfig>,
}

impl PageContext {
    /// Read the providers installed by `App`. Call during component setup.
    pub fn expect() -> Self {
        Self {
            session: expect_context::<RwSignal<PanelSession>>(),
            ui: expect_context::<RwSignal<UiState>>(),
            config: StoredValue::new(expect_context::<PanelConfig>()),
        }
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(|c| c.page_size)
    }

    /// Client for the configured backend carrying the current session token.
    pub fn client(&self) -> ApiClient {
        self.config.with_value(|config| self.session.with_untracked(|s| ApiClient::for_session(config, s)))
    }

    pub fn toast_success(&self, message: impl Into<String>) {
        let message = message.into();
        self.ui.update(|u| {
            u.push_success(message);
        });
    }

    /// Surface a failed call as an error toast. A 401 also drops the session,
    /// which makes the route guard send the user back to login.
    pub fn report(&self, err: &ApiError) {
        log::warn!("api call failed: {err}");
        if err.is_unauthorized() {
            self.session.update(PanelSession::clear_session);
        }
        self.ui.update(|u| {
            u.push_error(err.user_message());
        });
    }
}

/// Labelled text input bound to one field of a form signal.
pub fn form_field<F>(
    label: &'static str,
    input_type: &'static str,
    form: RwSignal<F>,
    get: fn(&F) -> &str,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                prop:value=move || form.with(|f| get(f).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}

/// Numeric id behind a table record key.
pub fn parse_id(key: &str) -> Option<i64> {
    key.trim().parse().ok()
}
