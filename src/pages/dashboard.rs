//! Dashboard shell (header, sidebar, nested outlet) and the overview page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted under `RequireAuth`. Logout only clears the session store; the
//! guard notices and performs the redirect.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use super::PageContext;
use crate::net::types::UserRow;
use crate::state::session::PanelSession;

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "نمای کلی", href: "/dashboard" },
    NavItem { label: "کاربران", href: "/dashboard/users" },
    NavItem { label: "خودروها", href: "/dashboard/cars" },
];

/// Aggregates shown above the users list and on the overview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
}

pub fn user_stats(users: &[UserRow]) -> UserStats {
    UserStats { total: users.len(), active: users.iter().filter(|u| u.active).count() }
}

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let ctx = PageContext::expect();
    let sidebar_open = RwSignal::new(true);
    let identifier = move || ctx.session.with(|s| s.identifier().unwrap_or_default().to_owned());

    let on_logout = move |_| {
        log::info!("logout");
        ctx.session.update(PanelSession::clear_session);
    };

    view! {
        <div class="dashboard" dir="rtl">
            <header class="dashboard__header">
                <button
                    class="btn dashboard__menu-toggle"
                    aria-label="منو"
                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <A href="/dashboard" attr:class="dashboard__brand">
                    {crate::APP_NAME}
                </A>
                <span class="dashboard__spacer"></span>
                <span class="dashboard__welcome">"خوش آمدید"</span>
                <span class="dashboard__identity" dir="ltr">
                    {identifier}
                </span>
                <button class="btn dashboard__logout" on:click=on_logout>
                    "خروج"
                </button>
            </header>
            <div class="dashboard__body">
                <Show when=move || sidebar_open.get()>
                    <nav class="dashboard__sidebar" aria-label="ناوبری">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <A href=item.href exact=true attr:class="dashboard__nav-link">
                                        {item.label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>
                <main class="dashboard__content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let users = RwSignal::new(None::<UserStats>);
    let cars = RwSignal::new(None::<usize>);

    leptos::task::spawn_local(async move {
        let client = ctx.client();
        match client.list_users().await {
            Ok(rows) => users.set(Some(user_stats(&rows))),
            Err(e) => {
                ctx.report(&e);
                if e.is_unauthorized() {
                    return;
                }
            }
        }
        match client.list_cars().await {
            Ok(rows) => cars.set(Some(rows.len())),
            Err(e) => ctx.report(&e),
        }
    });

    let count = |value: Option<usize>| value.map_or_else(|| "…".to_owned(), |n| n.to_string());

    view! {
        <section class="overview">
            <h2 class="page-title">"نمای کلی"</h2>
            <div class="stat-grid">
                <div class="stat-card">
                    <div class="stat-card__title">"کل کاربران"</div>
                    <div class="stat-card__value">{move || count(users.get().map(|s| s.total))}</div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__title">"کاربران فعال"</div>
                    <div class="stat-card__value">{move || count(users.get().map(|s| s.active))}</div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__title">"خودروها"</div>
                    <div class="stat-card__value">{move || count(cars.get())}</div>
                </div>
            </div>
        </section>
    }
}
