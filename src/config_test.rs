use super::*;

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = PanelConfig::from_vars(None, None);
    assert_eq!(cfg, PanelConfig::default());
    assert_eq!(cfg.api_base_url, "/api");
    assert_eq!(cfg.page_size, 10);
}

#[test]
fn from_vars_trims_trailing_slash() {
    let cfg = PanelConfig::from_vars(Some("http://192.168.43.129:8000/api/"), None);
    assert_eq!(cfg.api_base_url, "http://192.168.43.129:8000/api");
}

#[test]
fn from_vars_blank_base_url_falls_back() {
    let cfg = PanelConfig::from_vars(Some("   "), None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_vars_parses_page_size() {
    assert_eq!(PanelConfig::from_vars(None, Some("25")).page_size, 25);
}

#[test]
fn from_vars_rejects_zero_or_garbage_page_size() {
    assert_eq!(PanelConfig::from_vars(None, Some("0")).page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(PanelConfig::from_vars(None, Some("ten")).page_size, DEFAULT_PAGE_SIZE);
}
