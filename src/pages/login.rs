//! Admin login page: mobile + password, or mobile + one-time code.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the guard's redirect target. A successful password login writes
//! the session and returns to the location the guard recorded in history
//! state; an authenticated visit skips the form entirely.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use serde_json::Value;

use super::phone::{OTP_PATH, validate_mobile};
use super::{MSG_LOGIN_FAILED, MSG_PASSWORD_REQUIRED, PageContext};
use crate::APP_NAME;
use crate::net::error::ApiError;
use crate::state::session::IdentifierUpdate;
use crate::util::auth::{forward_origin, origin_from_state, post_login_target};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    Password,
    Otp,
}

/// Validate the form for `mode`; returns the normalized mobile.
///
/// # Errors
///
/// Returns the user-facing message for the first invalid field.
pub fn validate_login(mode: LoginMode, mobile: &str, password: &str) -> Result<String, &'static str> {
    let mobile = validate_mobile(mobile)?;
    if mode == LoginMode::Password && password.trim().is_empty() {
        return Err(MSG_PASSWORD_REQUIRED);
    }
    Ok(mobile)
}

/// A 402 whose body says `data.redirect = "otp"` means a code is already
/// pending, so the user should go straight to code entry.
pub fn redirects_to_otp(err: &ApiError) -> bool {
    match err {
        ApiError::Status { status: 402, body: Some(body) } => {
            body.pointer("/data/redirect").and_then(Value::as_str) == Some("otp")
        }
        _ => false,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let navigate = use_navigate();
    let location = use_location();
    let origin = origin_from_state(&location.state.get_untracked());
    let target = post_login_target(origin.as_deref());

    let mode = RwSignal::new(LoginMode::default());
    let mobile = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Covers both "already logged in" and "just logged in".
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if ctx.session.with(|s| s.is_authenticated()) {
            navigate_home(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let switch_mode = move |next: LoginMode| {
        mode.set(next);
        error.set(None);
        if next == LoginMode::Otp {
            password.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current_mode = mode.get();
        let secret = password.get();
        let normalized = match validate_login(current_mode, &mobile.get(), &secret) {
            Ok(m) => m,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let navigate = navigate.clone();
        let origin = origin.clone();
        leptos::task::spawn_local(async move {
            let client = ctx.client();
            match current_mode {
                LoginMode::Password => match client.login_with_password(&normalized, &secret).await {
                    Ok(Some(token)) => {
                        log::info!("password login succeeded");
                        ctx.session.update(|s| s.set_session(Some(token), IdentifierUpdate::Set(Some(normalized))));
                    }
                    Ok(None) => error.set(Some(MSG_LOGIN_FAILED.to_owned())),
                    Err(e) => {
                        log::warn!("password login failed: {e}");
                        error.set(Some(e.user_message()));
                    }
                },
                LoginMode::Otp => match client.send_code(&normalized).await {
                    Ok(()) => {
                        ctx.session.update(|s| s.set_session(None, IdentifierUpdate::Set(Some(normalized))));
                        navigate(OTP_PATH, forward_origin(origin.as_deref()));
                    }
                    Err(e) if redirects_to_otp(&e) => {
                        ctx.session.update(|s| s.set_session(None, IdentifierUpdate::Set(Some(normalized))));
                        navigate(OTP_PATH, forward_origin(origin.as_deref()));
                    }
                    Err(e) => {
                        log::warn!("send code failed: {e}");
                        error.set(Some(e.user_message()));
                    }
                },
            }
            busy.set(false);
        });
    };

    let mode_class = move |m: LoginMode| {
        if mode.get() == m { "login-mode__tab login-mode__tab--active" } else { "login-mode__tab" }
    };

    view! {
        <div class="login-page" dir="rtl">
            <div class="login-card">
                <h1>{APP_NAME}</h1>
                <h2 class="login-card__title">"ورود ادمین"</h2>
                <p class="login-card__subtitle">
                    {move || match mode.get() {
                        LoginMode::Otp => "شماره موبایل خود را وارد کنید",
                        LoginMode::Password => "شماره موبایل و رمز عبور خود را وارد کنید",
                    }}
                </p>
                <div class="login-mode">
                    <button
                        type="button"
                        class=move || mode_class(LoginMode::Otp)
                        on:click=move |_| switch_mode(LoginMode::Otp)
                    >
                        "ورود با کد تایید"
                    </button>
                    <button
                        type="button"
                        class=move || mode_class(LoginMode::Password)
                        on:click=move |_| switch_mode(LoginMode::Password)
                    >
                        "ورود با رمز عبور"
                    </button>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="mobile">
                        "شماره موبایل"
                    </label>
                    <input
                        id="mobile"
                        class="login-input"
                        dir="ltr"
                        type="tel"
                        inputmode="numeric"
                        placeholder="09XXXXXXXXX"
                        prop:value=move || mobile.get()
                        on:input=move |ev| mobile.set(event_target_value(&ev))
                    />
                    <Show when=move || mode.get() == LoginMode::Password>
                        <label class="login-label" for="password">
                            "رمز عبور"
                        </label>
                        <input
                            id="password"
                            class="login-input"
                            type="password"
                            placeholder="رمز عبور خود را وارد کنید"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </Show>
                    <Show when=move || error.with(Option::is_some)>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary login-submit" type="submit" disabled=move || busy.get()>
                        {move || match (busy.get(), mode.get()) {
                            (true, _) => "در حال ورود...",
                            (false, LoginMode::Otp) => "ارسال کد تایید",
                            (false, LoginMode::Password) => "ورود به سیستم",
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
