//! API base URL configuration.
//!
//! The backend lives on a separate origin. Its base URL is baked in at build
//! time from `API_URL` so the same WASM bundle never reads the environment at
//! runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Static settings for the backend connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Read the build-time `API_URL` override, falling back to [`DEFAULT_API_URL`].
    pub fn from_build_env() -> Self {
        Self::new(option_env!("API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL.
    ///
    /// `"/auth/me/"` and `"auth/me/"` resolve to the same URL; trailing
    /// slashes on the path are preserved since the backend routes require them.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
