//! Runtime configuration.

use std::env;

/// Public upstream the catalog talks to when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://api.escuelajs.co/api/v1";

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "CATALOG_API_URL";

/// Settings shared by every repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Root every resource path is built on, e.g. `https://host/api/v1`.
    pub api_url: String,
}

impl CatalogConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Reads `CATALOG_API_URL`, loading a `.env` file first if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Replaces the API URL when an explicit value is given, e.g. from a CLI flag.
    pub fn with_api_url(self, api_url: Option<String>) -> Self {
        match api_url {
            Some(api_url) => Self::new(api_url),
            None => self,
        }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup(API_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
