//! Route-guard decision and post-login redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RequireAuth` evaluates [`guard`] on every render. The requested location
//! travels to the login page as history state, never as a query parameter.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;
use leptos_router::location::State;

use crate::state::session::Session;

/// Unauthenticated entry point (password login).
pub const LOGIN_PATH: &str = "/";
/// Where a successful login lands when no origin was recorded.
pub const DEFAULT_LANDING: &str = "/dashboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect { to: &'static str, from: String },
}

/// Allow when a token is present, otherwise send the caller to the login
/// page remembering `requested`.
#[must_use]
pub fn guard(session: &Session, requested: &str) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect { to: LOGIN_PATH, from: requested.to_owned() }
    }
}

/// Destination after login: the recorded origin when it is a local
/// dashboard path, else [`DEFAULT_LANDING`].
#[must_use]
pub fn post_login_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with("/dashboard") && !path.starts_with("//") => path.to_owned(),
        _ => DEFAULT_LANDING.to_owned(),
    }
}

/// Navigation options for the guard redirect: replace history and carry the
/// requested location as state.
#[must_use]
pub fn redirect_options(from: &str) -> NavigateOptions {
    NavigateOptions { replace: true, state: origin_state(from), ..NavigateOptions::default() }
}

/// Navigation options for a later step of the login flow (OTP, signup) that
/// keeps the recorded origin in history state.
#[must_use]
pub fn forward_origin(from: Option<&str>) -> NavigateOptions {
    NavigateOptions { state: from.map_or_else(State::default, origin_state), ..NavigateOptions::default() }
}

#[cfg(feature = "csr")]
fn origin_state(from: &str) -> State {
    State::new(Some(wasm_bindgen::JsValue::from_str(from)))
}

#[cfg(not(feature = "csr"))]
fn origin_state(from: &str) -> State {
    let _ = from;
    State::default()
}

/// Read the origin recorded by [`redirect_options`] from history state.
#[must_use]
pub fn origin_from_state(state: &State) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        state.to_js_value().as_string()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = state;
        None
    }
}
