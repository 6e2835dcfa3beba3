//! Table view state and the filter -> sort -> paginate pipeline.
//!
//! DESIGN
//! ======
//! The table owns its data and four independent view-state variables (search
//! term, sort spec, page, selection). Every derived view is recomputed from
//! scratch; callers memoize [`Table::snapshot`] if they need to.
//!
//! Selection is keyed by [`Record::record_key`] and is not cleared by paging,
//! searching or sorting. Replacing the data prunes keys that disappeared.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::column::{Align, Column, Record};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "جستجو...";
pub const DEFAULT_EMPTY_MESSAGE: &str = "داده‌ای برای نمایش وجود ندارد";
/// Upper bound on numbered page buttons in the pager.
pub const MAX_PAGE_BUTTONS: usize = 15;

/// Rejected table configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("table needs at least one column")]
    NoColumns,
    #[error("page size must be a positive integer")]
    ZeroPageSize,
    #[error("duplicate column key: {0}")]
    DuplicateColumn(String),
}

/// Static table configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    pub searchable: bool,
    pub search_placeholder: String,
    pub pagination: bool,
    pub page_size: usize,
    pub selectable: bool,
    pub empty_message: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            searchable: true,
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_owned(),
            pagination: true,
            page_size: DEFAULT_PAGE_SIZE,
            selectable: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Local, ephemeral view state of one table instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub sort: Option<SortSpec>,
    pub current_page: usize,
    pub selected: BTreeSet<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort: None,
            current_page: 1,
            selected: BTreeSet::new(),
        }
    }
}

type RowCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;
type SelectionCallback<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Generic searchable, sortable, paginated, selectable record list.
pub struct Table<T> {
    columns: Vec<Column<T>>,
    options: TableOptions,
    data: Vec<T>,
    state: ViewState,
    loading: bool,
    on_row_click: Option<RowCallback<T>>,
    on_selection_change: Option<SelectionCallback<T>>,
}

impl<T: Record + Clone> Table<T> {
    /// Build an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] when `columns` is empty, keys repeat, or the
    /// page size is zero.
    pub fn new(columns: Vec<Column<T>>, options: TableOptions) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        if options.page_size == 0 {
            return Err(TableError::ZeroPageSize);
        }
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(TableError::DuplicateColumn(column.key.clone()));
            }
        }
        Ok(Self {
            columns,
            options,
            data: Vec::new(),
            state: ViewState::default(),
            loading: false,
            on_row_click: None,
            on_selection_change: None,
        })
    }

    #[must_use]
    pub fn with_row_click<F>(mut self, callback: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_row_click = Some(Arc::new(callback));
        self
    }

    /// Register a listener that receives the full selection after every change.
    #[must_use]
    pub fn with_selection_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        self.on_selection_change = Some(Arc::new(callback));
        self
    }

    #[must_use]
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    #[must_use]
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn has_row_click(&self) -> bool {
        self.on_row_click.is_some()
    }

    /// Replace the source data wholesale.
    ///
    /// The current page is re-clamped and selected keys missing from the new
    /// data are dropped (notifying the selection listener when that happens).
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        let present: HashSet<String> = self.data.iter().map(Record::record_key).collect();
        let before = self.state.selected.len();
        self.state.selected.retain(|key| present.contains(key));
        self.clamp_page();
        if self.state.selected.len() != before {
            self.emit_selection();
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Update the search term and return to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        if self.loading || !self.options.searchable {
            return;
        }
        self.state.search_term = term.into();
        self.state.current_page = 1;
    }

    /// Header click: none -> asc -> desc -> none on the same column; a
    /// different column starts over at asc.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.loading {
            return;
        }
        if !self.columns.iter().any(|c| c.key == key && c.sortable) {
            return;
        }
        self.state.sort = match self.state.sort.take() {
            Some(spec) if spec.key == key => match spec.direction {
                SortDirection::Asc => Some(SortSpec { key: spec.key, direction: SortDirection::Desc }),
                SortDirection::Desc => None,
            },
            _ => Some(SortSpec { key: key.to_owned(), direction: SortDirection::Asc }),
        };
    }

    pub fn set_page(&mut self, page: usize) {
        if self.loading {
            return;
        }
        self.state.current_page = page;
        self.clamp_page();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.state.current_page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.state.current_page.saturating_sub(1));
    }

    /// Add or remove one rendered row from the selection.
    pub fn toggle_row(&mut self, key: &str) {
        if self.loading || !self.options.selectable {
            return;
        }
        let rendered = self.page_rows().iter().any(|r| r.record_key() == key);
        if !rendered {
            return;
        }
        if !self.state.selected.remove(key) {
            self.state.selected.insert(key.to_owned());
        }
        self.emit_selection();
    }

    /// Select every row on the current page, or clear the selection when the
    /// page is already fully selected.
    pub fn toggle_select_all(&mut self) {
        if self.loading || !self.options.selectable {
            return;
        }
        if self.is_page_fully_selected() {
            self.state.selected.clear();
        } else {
            let keys: Vec<String> = self.page_rows().iter().map(|r| r.record_key()).collect();
            self.state.selected.extend(keys);
        }
        self.emit_selection();
    }

    /// Forward a row click to the registered listener.
    pub fn click_row(&self, key: &str) {
        if self.loading {
            return;
        }
        let Some(callback) = &self.on_row_click else {
            return;
        };
        if let Some(record) = self.data.iter().find(|r| r.record_key() == key) {
            callback(record);
        }
    }

    /// Records matching the search term, in source order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&T> {
        let term = self.state.search_term.to_lowercase();
        if !self.options.searchable || term.is_empty() {
            return self.data.iter().collect();
        }
        self.data
            .iter()
            .filter(|record| {
                self.columns
                    .iter()
                    .any(|column| column.display(record).to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Filtered records in sort order. Ties keep their filtered order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&T> {
        let mut rows = self.filtered();
        if let Some(spec) = &self.state.sort {
            rows.sort_by(|a, b| {
                let (a, b) = (a.field(&spec.key), b.field(&spec.key));
                // Empty cells stay at the bottom whichever way the column runs.
                match (a.is_empty(), b.is_empty()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => match spec.direction {
                        SortDirection::Asc => a.compare(&b),
                        SortDirection::Desc => b.compare(&a),
                    },
                }
            });
        }
        rows
    }

    /// Rows visible on the current page.
    #[must_use]
    pub fn page_rows(&self) -> Vec<&T> {
        let rows = self.sorted();
        if !self.options.pagination {
            return rows;
        }
        let page = self.state.current_page.clamp(1, self.total_pages_for(rows.len()));
        let start = (page - 1) * self.options.page_size;
        rows.into_iter().skip(start).take(self.options.page_size).collect()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_pages_for(self.filtered().len())
    }

    fn total_pages_for(&self, count: usize) -> usize {
        if !self.options.pagination {
            return 1;
        }
        count.div_ceil(self.options.page_size).max(1)
    }

    #[must_use]
    pub fn is_page_fully_selected(&self) -> bool {
        let rows = self.page_rows();
        !rows.is_empty() && rows.iter().all(|r| self.state.selected.contains(&r.record_key()))
    }

    /// Selected records in source order.
    #[must_use]
    pub fn selected_records(&self) -> Vec<T> {
        self.data
            .iter()
            .filter(|r| self.state.selected.contains(&r.record_key()))
            .cloned()
            .collect()
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        self.state.current_page = self.state.current_page.clamp(1, total);
    }

    fn emit_selection(&self) {
        if let Some(callback) = &self.on_selection_change {
            callback(self.selected_records().as_slice());
        }
    }

    /// Owned render model of the current view.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        let filtered_count = self.filtered().len();
        let total_pages = self.total_pages_for(filtered_count);
        let current_page = self.state.current_page.clamp(1, total_pages);

        let headers = self
            .columns
            .iter()
            .map(|column| HeaderSnapshot {
                key: column.key.clone(),
                title: column.title.clone(),
                align: column.align,
                width: column.width.clone(),
                sortable: column.sortable,
                sort: self
                    .state
                    .sort
                    .as_ref()
                    .filter(|spec| spec.key == column.key)
                    .map(|spec| spec.direction),
            })
            .collect();

        let rows = self
            .page_rows()
            .into_iter()
            .map(|record| {
                let key = record.record_key();
                RowSnapshot {
                    selected: self.state.selected.contains(&key),
                    cells: self.columns.iter().map(|c| c.display(record)).collect(),
                    key,
                }
            })
            .collect();

        let range = if filtered_count == 0 {
            None
        } else if self.options.pagination {
            let start = (current_page - 1) * self.options.page_size + 1;
            let end = (current_page * self.options.page_size).min(filtered_count);
            Some((start, end))
        } else {
            Some((1, filtered_count))
        };

        TableSnapshot {
            loading: self.loading,
            searchable: self.options.searchable,
            selectable: self.options.selectable,
            search_term: self.state.search_term.clone(),
            search_placeholder: self.options.search_placeholder.clone(),
            empty_message: self.options.empty_message.clone(),
            headers,
            rows,
            all_selected: self.is_page_fully_selected(),
            selected_count: self.state.selected.len(),
            filtered_count,
            current_page,
            total_pages,
            range,
            page_buttons: (1..=total_pages.min(MAX_PAGE_BUTTONS)).collect(),
            show_pager: self.options.pagination && total_pages > 1,
        }
    }
}

impl<T> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("rows", &self.data.len())
            .field("state", &self.state)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

/// Header cell render model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderSnapshot {
    pub key: String,
    pub title: String,
    pub align: Align,
    pub width: Option<String>,
    pub sortable: bool,
    /// Active direction when this column drives the sort.
    pub sort: Option<SortDirection>,
}

/// Body row render model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowSnapshot {
    pub key: String,
    pub cells: Vec<String>,
    pub selected: bool,
}

/// Everything a renderer needs to draw the table once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSnapshot {
    pub loading: bool,
    pub searchable: bool,
    pub selectable: bool,
    pub search_term: String,
    pub search_placeholder: String,
    pub empty_message: String,
    pub headers: Vec<HeaderSnapshot>,
    pub rows: Vec<RowSnapshot>,
    pub all_selected: bool,
    pub selected_count: usize,
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    /// 1-based inclusive `(first, last)` row numbers shown, if any.
    pub range: Option<(usize, usize)>,
    pub page_buttons: Vec<usize>,
    pub show_pager: bool,
}

impl TableSnapshot {
    /// Column span of the empty-state row, including the selection column.
    #[must_use]
    pub fn colspan(&self) -> usize {
        self.headers.len() + usize::from(self.selectable)
    }
}
