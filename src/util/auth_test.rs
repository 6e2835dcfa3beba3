use super::*;

fn session(token: Option<&str>, identifier: Option<&str>) -> Session {
    Session { token: token.map(str::to_owned), identifier: identifier.map(str::to_owned) }
}

#[test]
fn guard_allows_with_token() {
    assert_eq!(guard(&session(Some("abc"), None), "/dashboard/users"), GuardDecision::Allow);
}

#[test]
fn guard_redirects_without_token_and_keeps_origin() {
    assert_eq!(
        guard(&session(None, None), "/dashboard/cars/4"),
        GuardDecision::Redirect { to: "/", from: "/dashboard/cars/4".to_owned() }
    );
}

#[test]
fn guard_redirects_mid_login_identifier_only() {
    let decision = guard(&session(None, Some("09120000000")), "/dashboard");
    assert!(matches!(decision, GuardDecision::Redirect { .. }));
}

#[test]
fn post_login_target_prefers_dashboard_origin() {
    assert_eq!(post_login_target(Some("/dashboard/users")), "/dashboard/users");
}

#[test]
fn post_login_target_defaults_for_missing_or_foreign_origin() {
    assert_eq!(post_login_target(None), DEFAULT_LANDING);
    assert_eq!(post_login_target(Some("/auth/otp")), DEFAULT_LANDING);
    assert_eq!(post_login_target(Some("https://evil.test/dashboard")), DEFAULT_LANDING);
}

#[test]
fn redirect_options_replace_history() {
    assert!(redirect_options("/dashboard").replace);
}

#[cfg(not(feature = "csr"))]
#[test]
fn origin_state_is_empty_outside_the_browser() {
    assert_eq!(origin_from_state(&redirect_options("/dashboard").state), None);
}

#[test]
fn forward_origin_pushes_history() {
    assert!(!forward_origin(Some("/dashboard/users/3")).replace);
    assert!(!forward_origin(None).replace);
}

#[cfg(not(feature = "csr"))]
#[test]
fn forwarded_origin_is_empty_outside_the_browser() {
    assert_eq!(origin_from_state(&forward_origin(Some("/dashboard/cars")).state), None);
}
