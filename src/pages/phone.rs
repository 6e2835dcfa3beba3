//! Mobile-number entry: first step of the one-time-code login.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{MSG_INVALID_MOBILE, PageContext};
use crate::state::session::IdentifierUpdate;
use crate::util::phone::{is_valid_iran_mobile, normalize_iran_mobile};

pub const OTP_PATH: &str = "/auth/otp";

/// Normalize and validate a typed mobile number.
///
/// # Errors
///
/// Returns the user-facing message when the number is not `09xxxxxxxxx`.
pub fn validate_mobile(raw: &str) -> Result<String, &'static str> {
    let normalized = normalize_iran_mobile(raw);
    if is_valid_iran_mobile(&normalized) { Ok(normalized) } else { Err(MSG_INVALID_MOBILE) }
}

#[component]
pub fn PhonePage() -> impl IntoView {
    let ctx = PageContext::expect();
    let navigate = use_navigate();
    let mobile = RwSignal::new(ctx.session.with_untracked(|s| s.identifier().unwrap_or_default().to_owned()));
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let normalized = match validate_mobile(&mobile.get()) {
            Ok(m) => m,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match ctx.client().send_code(&normalized).await {
                Ok(()) => {
                    ctx.session.update(|s| s.set_session(None, IdentifierUpdate::Set(Some(normalized))));
                    navigate(OTP_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("send code failed: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page" dir="rtl">
            <div class="login-card">
                <h1>"ورود با کد تایید"</h1>
                <p class="login-card__subtitle">"شماره موبایل خود را وارد کنید"</p>
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
                    <Show when=move || error.with(Option::is_some)>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary login-submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "در حال ارسال..." } else { "ارسال کد تایید" }}
                    </button>
                </form>
                <p class="login-card__links">
                    <a href="/">"ورود با رمز عبور"</a>
                </p>
            </div>
        </div>
    }
}
