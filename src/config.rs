//! API Configuration
//!
//! The base URL is fixed at build time; set `NOTES_API_BASE_URL` when
//! running `trunk build` to point the app at another deployment.

/// Default notes service endpoint
pub const DEFAULT_BASE_URL: &str = "https://notes-api.dicoding.dev/v2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Config baked in at compile time
    pub fn from_build_env() -> Self {
        Self::new(option_env!("NOTES_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Absolute URL for a path such as `/notes/archived`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
