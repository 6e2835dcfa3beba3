//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `ui`) so pages depend on small
//! focused models provided through Leptos context.

pub mod session;
pub mod ui;
