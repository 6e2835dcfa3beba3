//! # fleet-panel
//!
//! Leptos + WASM admin dashboard for a fleet backend (Persian, RTL).
//!
//! This crate contains the session store and route guard, the REST client,
//! list/form pages, and the Leptos view over the `datatable` crate, which
//! holds the search/sort/paginate/select engine.
//!
//! Build for the browser with the `csr` feature; without it, browser APIs
//! are stubbed so the pure logic tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub const APP_NAME: &str = "پنل مدیریت";

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(level);
    log::info!("starting {APP_NAME}");
    leptos::mount::mount_to_body(app::App);
}
