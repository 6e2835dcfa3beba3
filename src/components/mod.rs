//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared dashboard chrome (tables, dialogs, toasts, the
//! route guard) while reading/writing state from Leptos context providers.

pub mod confirm_dialog;
pub mod data_table;
pub mod require_auth;
pub mod toast;
