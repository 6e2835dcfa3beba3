//! Browser-facing helpers with no view code of their own.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` wraps `localStorage` behind a trait, `phone` normalizes Iranian
//! mobile numbers, and `auth` holds the route-guard decisions. Each one tests
//! natively.

pub mod auth;
pub mod phone;
pub mod storage;
