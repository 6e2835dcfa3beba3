//! Networking for the panel backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls, `error` maps failures to user-facing messages,
//! and `types` defines the wire schema and table row models.

pub mod api;
pub mod error;
pub mod types;
