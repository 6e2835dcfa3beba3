//! One-time-code verification for the mobile stored in the session.

#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::{MSG_INVALID_OTP, MSG_LOGIN_FAILED, PageContext};
use crate::state::session::IdentifierUpdate;
use crate::util::auth::{forward_origin, origin_from_state, post_login_target};

pub const PHONE_PATH: &str = "/auth/phone";
pub const SIGNUP_PATH: &str = "/auth/signup";

/// Codes are 4 to 6 ASCII digits.
///
/// # Errors
///
/// Returns the user-facing message for anything else.
pub fn validate_otp(raw: &str) -> Result<String, &'static str> {
    let code = raw.trim();
    if (4..=6).contains(&code.len()) && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(code.to_owned())
    } else {
        Err(MSG_INVALID_OTP)
    }
}

#[component]
pub fn OtpPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let navigate = use_navigate();
    // Set when the login page sent us here on the way back to a guarded page.
    let origin = origin_from_state(&use_location().state.get_untracked());
    let mobile = Memo::new(move |_| ctx.session.with(|s| s.identifier().map(str::to_owned)));
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate_phone = navigate.clone();
    Effect::new(move || {
        if mobile.with(Option::is_none) {
            navigate_phone(PHONE_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(number) = mobile.get() else {
            return;
        };
        let otp = match validate_otp(&code.get()) {
            Ok(c) => c,
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
            match ctx.client().verify_code(&number, &otp).await {
                Ok(resp) => match resp.token.filter(|t| !t.is_empty()) {
                    Some(token) => {
                        log::info!("code verified");
                        ctx.session.update(|s| s.set_session(Some(token), IdentifierUpdate::Keep));
                        navigate(
                            &post_login_target(origin.as_deref()),
                            NavigateOptions { replace: true, ..NavigateOptions::default() },
                        );
                    }
                    None if resp.need_signup => navigate(SIGNUP_PATH, forward_origin(origin.as_deref())),
                    None => error.set(Some(MSG_LOGIN_FAILED.to_owned())),
                },
                Err(e) => {
                    log::warn!("verify code failed: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    let on_resend = move |_| {
        let Some(number) = mobile.get_untracked() else {
            return;
        };
        error.set(None);
        leptos::task::spawn_local(async move {
            match ctx.client().send_code(&number).await {
                Ok(()) => ctx.toast_success("کد تایید دوباره ارسال شد"),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="login-page" dir="rtl">
            <div class="login-card">
                <h1>"تایید شماره موبایل"</h1>
                <p class="login-card__subtitle">
                    "کد ارسال شده به "
                    <span dir="ltr">{move || mobile.get().unwrap_or_default()}</span>
                    " را وارد کنید"
                </p>
                <form class="login-form" on:submit=on_verify>
                    <input
                        class="login-input login-input--code"
                        dir="ltr"
                        type="text"
                        inputmode="numeric"
                        autocomplete="one-time-code"
                        maxlength="6"
                        placeholder="------"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <Show when=move || error.with(Option::is_some)>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary login-submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "در حال بررسی..." } else { "تایید" }}
                    </button>
                </form>
                <div class="login-card__links">
                    <button class="btn btn--link" type="button" on:click=on_resend>
                        "ارسال مجدد کد"
                    </button>
                    <a href=PHONE_PATH>"تغییر شماره"</a>
                </div>
            </div>
        </div>
    }
}
