//! Route guard wrapper for the dashboard subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates [`guard`] whenever the session or the path changes. A session
//! cleared mid-visit (logout, 401) therefore bounces the user to login
//! without any page having to navigate itself.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::PanelSession;
use crate::util::auth::{GuardDecision, guard, redirect_options};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<PanelSession>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let requested = location.pathname.get();
        session.with(|s| guard(s.session(), &requested))
    });

    Effect::new(move || {
        if let GuardDecision::Redirect { to, from } = decision.get() {
            log::info!("unauthenticated visit to {from}; redirecting to {to}");
            navigate(to, redirect_options(&from));
        }
    });

    view! {
        <Show when=move || decision.with(|d| *d == GuardDecision::Allow)>
            {children()}
        </Show>
    }
}
