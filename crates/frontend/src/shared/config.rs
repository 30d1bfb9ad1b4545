//! Runtime configuration of the front-end.
//!
//! The API base can be pinned at build time with `STOREKEEPER_API_BASE`;
//! otherwise it is derived from the page location, with the backend on
//! port 8000 under `/api`.

use once_cell::sync::Lazy;

pub const BACKEND_PORT: u16 = 8000;
pub const LOCALES_PATH: &str = "/locales";
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: String,
    pub locales_path: &'static str,
    pub default_page_size: usize,
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| AppConfig {
    api_base: resolve_api_base(option_env!("STOREKEEPER_API_BASE")),
    locales_path: LOCALES_PATH,
    default_page_size: DEFAULT_PAGE_SIZE,
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

fn resolve_api_base(pinned: Option<&str>) -> String {
    if let Some(base) = pinned.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    let Some(window) = web_sys::window() else {
        return format!("http://127.0.0.1:{BACKEND_PORT}/api");
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{protocol}//{hostname}:{BACKEND_PORT}/api")
}

/// Full URL of an API path such as `/categories/4`.
pub fn api_url(path: &str) -> String {
    join_url(&config().api_base, path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_base_wins_and_loses_trailing_slash() {
        assert_eq!(
            resolve_api_base(Some("https://erp.example.com/api/")),
            "https://erp.example.com/api"
        );
    }

    #[test]
    fn join_url_normalises_slashes() {
        assert_eq!(join_url("http://h/api/", "/items"), "http://h/api/items");
        assert_eq!(join_url("http://h/api", "items/3"), "http://h/api/items/3");
    }
}
