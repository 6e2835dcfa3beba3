//! Client-side record table: search, sort, pagination and selection.
//!
//! This crate is UI-framework agnostic. The panel's Leptos component wraps a
//! [`Table`] in a signal and renders [`TableSnapshot`]s; tests drive the same
//! state machine directly.

pub mod cell;
pub mod column;
pub mod table;

pub use cell::CellValue;
pub use column::{Align, Column, Record};
pub use table::{
    DEFAULT_EMPTY_MESSAGE, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_PLACEHOLDER, HeaderSnapshot, MAX_PAGE_BUTTONS,
    RowSnapshot, SortDirection, SortSpec, Table, TableError, TableOptions, TableSnapshot, ViewState,
};
