//! Client configuration

use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration for connecting to the menu server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL including the `/api` prefix (e.g., "http://localhost:5000/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Create a network client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000/api")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout_duration(), Duration::from_secs(10));
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::default()
            .with_base_url("http://10.0.0.2:8080/api")
            .with_timeout(3);
        assert_eq!(config.base_url, "http://10.0.0.2:8080/api");
        assert_eq!(config.timeout, 3);
    }
}
