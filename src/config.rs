//! Build-time panel configuration.
//!
//! The bundle runs in the browser, so settings are baked in from the build
//! environment (`option_env!`) instead of read at runtime. Missing or
//! unparsable values fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_PAGE_SIZE: usize = datatable::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// REST base URL without a trailing slash.
    pub api_base_url: String,
    /// Rows per page for list screens.
    pub page_size: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), page_size: DEFAULT_PAGE_SIZE }
    }
}

impl PanelConfig {
    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `API_BASE_URL`: default `/api` (dev proxy)
    /// - `PANEL_PAGE_SIZE`: default 10, must be positive
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(option_env!("API_BASE_URL"), option_env!("PANEL_PAGE_SIZE"))
    }

    #[must_use]
    pub fn from_vars(api_base_url: Option<&str>, page_size: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let page_size = parse_page_size(page_size);
        Self { api_base_url, page_size }
    }
}

fn parse_page_size(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
