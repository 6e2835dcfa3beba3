use super::*;

#[test]
fn ui_state_default_has_no_toast() {
    let state = UiState::default();
    assert!(state.toast.is_none());
    assert_eq!(state.toast_seq, 0);
}

#[test]
fn push_replaces_toast_and_bumps_seq() {
    let mut state = UiState::default();
    let first = state.push_success("خودرو حذف شد");
    let second = state.push_error("خطا");
    assert_eq!(first, 1);
    assert_eq!(second, 2);
    let toast = state.toast.unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "خطا");
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut state = UiState::default();
    let first = state.push_success("a");
    state.push_success("b");
    state.dismiss(first);
    assert_eq!(state.toast.as_ref().map(|t| t.message.as_str()), Some("b"));
}

#[test]
fn dismiss_current_hides_toast() {
    let mut state = UiState::default();
    let seq = state.push_error("x");
    state.dismiss(seq);
    assert!(state.toast.is_none());
}
