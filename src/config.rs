//! API client configuration resolved at build time.
//!
//! The browser bundle has no process environment, so the API base URL is
//! baked in from `WMS_API_BASE` when the crate is compiled. The dev server
//! proxies `/api` to the backend, which is why that is the default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";

/// Local-storage key holding the selected mock role.
pub const MOCK_ROLE_STORAGE_KEY: &str = "wms.mock.role";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for every request path, without a trailing slash.
    pub base_url: String,
    /// Send cookies with every request (`credentials: include`).
    pub with_credentials: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE.to_owned(), with_credentials: true }
    }
}

impl ApiConfig {
    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `WMS_API_BASE`: API base URL, default `/api`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("WMS_API_BASE"))
    }

    /// Build config from an optional base URL override.
    #[must_use]
    pub fn with_base_url(raw: Option<&str>) -> Self {
        Self { base_url: normalize_base_url(raw), ..Self::default() }
    }

    /// Join `path` onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.trim_end_matches('/').is_empty() => value.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE.to_owned(),
    }
}
