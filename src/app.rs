//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Html, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::APP_NAME;
use crate::components::require_auth::RequireAuth;
use crate::components::toast::ToastHost;
use crate::config::PanelConfig;
use crate::pages::cars::{AddCarPage, CarsPage, EditCarPage};
use crate::pages::dashboard::{DashboardLayout, OverviewPage};
use crate::pages::login::LoginPage;
use crate::pages::otp::OtpPage;
use crate::pages::phone::PhonePage;
use crate::pages::signup::SignupPage;
use crate::pages::users::{AddUserPage, EditUserPage, UsersPage};
use crate::state::session::PanelSession;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Loads the persisted session once, provides it with the build config and
/// UI state, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PanelConfig::from_env();
    log::debug!("api base url: {}", config.api_base_url);
    let session = RwSignal::new(PanelSession::load(BrowserStorage));
    let ui = RwSignal::new(UiState::default());

    provide_context(config);
    provide_context(session);
    provide_context(ui);

    view! {
        <Html attr:lang="fa" attr:dir="rtl" />
        <Title text=APP_NAME />

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"صفحه مورد نظر پیدا نشد"</p> }>
                <Route path=StaticSegment("") view=LoginPage />
                <Route path=(StaticSegment("auth"), StaticSegment("phone")) view=PhonePage />
                <Route path=(StaticSegment("auth"), StaticSegment("otp")) view=OtpPage />
                <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignupPage />
                <ParentRoute path=StaticSegment("dashboard") view=GuardedDashboard>
                    <Route path=StaticSegment("") view=OverviewPage />
                    <Route path=StaticSegment("users") view=UsersPage />
                    <Route path=(StaticSegment("users"), StaticSegment("add")) view=AddUserPage />
                    <Route path=(StaticSegment("users"), ParamSegment("id")) view=EditUserPage />
                    <Route path=StaticSegment("cars") view=CarsPage />
                    <Route path=(StaticSegment("cars"), StaticSegment("add")) view=AddCarPage />
                    <Route path=(StaticSegment("cars"), ParamSegment("id")) view=EditCarPage />
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost />
    }
}

#[component]
fn GuardedDashboard() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardLayout />
        </RequireAuth>
    }
}
