//! Toast notification host.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// Auto-dismiss delay for toasts.
pub const TOAST_MS: u32 = 4_000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(seq) = ui.with(|u| u.toast.as_ref().map(|t| t.seq)) {
            gloo_timers::callback::Timeout::new(TOAST_MS, move || ui.update(|u| u.dismiss(seq))).forget();
        }
    });

    view! {
        {move || {
            ui.with(|u| u.toast.clone())
                .map(|toast| {
                    let seq = toast.seq;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| ui.update(|u| u.dismiss(seq))>
                            {toast.message}
                        </div>
                    }
                })
        }}
    }
}
