//! Local UI chrome state (toast notifications).
//!
//! DESIGN
//! ======
//! Keeps transient feedback out of page state so any page can raise a toast
//! and the layout-level `ToastHost` decides how long it stays.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    /// Bumped per toast so a stale auto-dismiss timer cannot hide a newer one.
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub toast: Option<Toast>,
    pub toast_seq: u64,
}

impl UiState {
    pub fn push_success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into())
    }

    pub fn push_error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    /// Hide the toast only if it is still the one identified by `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.toast.as_ref().is_some_and(|t| t.seq == seq) {
            self.toast = None;
        }
    }

    fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast { kind, message, seq: self.toast_seq });
        self.toast_seq
    }
}
