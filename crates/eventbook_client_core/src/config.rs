use std::env;

/// Base URL used when `EVENTBOOK_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

pub const API_URL_ENV: &str = "EVENTBOOK_API_URL";

/// Where the remote booking API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        match env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Absolute URL for an API path such as `/events`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
