//! Client Configuration
//!
//! The backend origin is the only knob; it may be overridden at build time
//! through `WISH_WALL_API_URL`.

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "authToken";
const DEFAULT_NOTIFICATION_TTL_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin including the `/api` prefix, without trailing slash
    pub api_base_url: String,
    /// Fixed feed page size (no pagination UI)
    pub page_size: u32,
    /// How long a notification stays on screen
    pub notification_ttl: Duration,
    /// localStorage key holding the bearer token
    pub token_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            notification_ttl: Duration::from_millis(DEFAULT_NOTIFICATION_TTL_MS),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from `WISH_WALL_API_URL` when it was
    /// set at compile time.
    pub fn from_build_env() -> Self {
        match option_env!("WISH_WALL_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::default().with_api_base_url(url),
            _ => Self::default(),
        }
    }

    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Join the base URL and a relative endpoint
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.api_base_url, endpoint)
        } else {
            format!("{}/{}", self.api_base_url, endpoint)
        }
    }

    /// First (and only) page of the feed
    pub fn wishes_endpoint(&self, page: u32) -> String {
        format!("/wishes?page={}&per_page={}", page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.notification_ttl, Duration::from_secs(3));
        assert_eq!(config.token_storage_key, "authToken");
    }

    #[test]
    fn test_endpoint_url_joins_slashes() {
        let config = ClientConfig::default().with_api_base_url("https://wishes.example/api/");
        assert_eq!(config.endpoint_url("/wishes/3"), "https://wishes.example/api/wishes/3");
        assert_eq!(config.endpoint_url("health"), "https://wishes.example/api/health");
    }

    #[test]
    fn test_wishes_endpoint_uses_page_size() {
        let config = ClientConfig::default();
        assert_eq!(config.wishes_endpoint(1), "/wishes?page=1&per_page=20");
    }
}
