//! Column descriptors and the record contract they read from.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// A row the table can display.
///
/// `record_key` must be stable across refetches of the same entity; selection
/// is tracked by it, so regenerated row values keep their selected state.
pub trait Record {
    /// Raw value addressed by a column key. Unknown keys return [`CellValue::Empty`].
    fn field(&self, key: &str) -> CellValue;

    /// Stable identifier for this record.
    fn record_key(&self) -> String;
}

/// Horizontal alignment of a column's header and cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    /// Start edge in the panel's RTL layout.
    #[default]
    Right,
}

impl Align {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

type RenderFn<T> = Arc<dyn Fn(&CellValue, &T) -> String + Send + Sync>;

/// Describes how one field of `T` is displayed, searched and sorted.
pub struct Column<T> {
    pub key: String,
    pub title: String,
    pub sortable: bool,
    pub align: Align,
    pub width: Option<String>,
    render: Option<RenderFn<T>>,
}

impl<T> Column<T> {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            align: Align::default(),
            width: None,
            render: None,
        }
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Override the display value. The raw value still drives sorting.
    #[must_use]
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &T) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    #[must_use]
    pub fn has_render(&self) -> bool {
        self.render.is_some()
    }
}

impl<T: Record> Column<T> {
    /// Raw value of this column for `record`.
    pub fn raw(&self, record: &T) -> CellValue {
        record.field(&self.key)
    }

    /// Display value: `render(raw, record)` when set, else the raw value as text.
    pub fn display(&self, record: &T) -> String {
        let raw = self.raw(record);
        match &self.render {
            Some(render) => render(&raw, record),
            None => raw.to_string(),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            sortable: self.sortable,
            align: self.align,
            width: self.width.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}
