//! Account creation for a verified mobile that has no account yet.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::otp::PHONE_PATH;
use super::{MSG_INVALID_MOBILE, PageContext};
use crate::net::types::SignupInput;
use crate::util::auth::{LOGIN_PATH, forward_origin, origin_from_state};

pub const MSG_SIGNUP_INVALID: &str = "نام را وارد کنید و رمز حداقل ۶ کاراکتر باشد";
pub const MIN_PASSWORD_CHARS: usize = 6;

/// # Errors
///
/// Returns the user-facing message when the mobile is missing, the name is
/// blank, or the password is shorter than [`MIN_PASSWORD_CHARS`].
pub fn validate_signup(mobile: Option<&str>, name: &str, password: &str) -> Result<SignupInput, &'static str> {
    let mobile = mobile.filter(|m| !m.is_empty()).ok_or(MSG_INVALID_MOBILE)?;
    let name = name.trim();
    if name.is_empty() || password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(MSG_SIGNUP_INVALID);
    }
    Ok(SignupInput { mobile: mobile.to_owned(), name: name.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let navigate = use_navigate();
    let origin = origin_from_state(&use_location().state.get_untracked());
    let mobile = Memo::new(move |_| ctx.session.with(|s| s.identifier().map(str::to_owned)));
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate_phone = navigate.clone();
    Effect::new(move || {
        if mobile.with(Option::is_none) {
            navigate_phone(PHONE_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_signup(mobile.get().as_deref(), &name.get(), &password.get()) {
            Ok(input) => input,
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
            match ctx.client().signup(&input).await {
                Ok(()) => {
                    ctx.toast_success("ثبت‌نام انجام شد؛ وارد شوید");
                    navigate(LOGIN_PATH, NavigateOptions { replace: true, ..forward_origin(origin.as_deref()) });
                }
                Err(e) => {
                    log::warn!("signup failed: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page" dir="rtl">
            <div class="login-card">
                <h1>"ثبت‌نام"</h1>
                <p class="login-card__subtitle" dir="ltr">
                    {move || mobile.get().unwrap_or_default()}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="name">
                        "نام"
                    </label>
                    <input
                        id="name"
                        class="login-input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">
                        "رمز عبور"
                    </label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.with(Option::is_some)>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary login-submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "در حال ثبت..." } else { "ثبت‌نام" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
