//! Client configuration. Values are public endpoints and presets; do not
//! store secrets here.

use std::env;

/// Default API base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable consulted by [`ClientConfig::from_env`].
pub const API_URL_ENV: &str = "CITYSCOPE_API_URL";

/// Configuration for the API client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Builds a config from an explicit base URL, trimming trailing slashes
    /// so path concatenation stays predictable.
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
        }
    }

    /// Loads the base URL from `CITYSCOPE_API_URL`, falling back to the
    /// local development server. Blank values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let api_base_url = env::var(API_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(api_base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
