//! Client configuration

use crate::client::NetworkHttpClient;
use crate::{ClientError, ClientResult};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the folio API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token sent on every request
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read `FOLIO_API_URL`, `FOLIO_API_TOKEN` and `FOLIO_API_TIMEOUT`
    pub fn from_env() -> ClientResult<Self> {
        let base_url =
            std::env::var("FOLIO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(base_url);

        config.token = std::env::var("FOLIO_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());

        if let Ok(raw) = std::env::var("FOLIO_API_TIMEOUT") {
            config.timeout = raw.parse().map_err(|_| {
                ClientError::Config(format!("FOLIO_API_TIMEOUT is not a number: {raw}"))
            })?;
        }

        Ok(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = ClientConfig::default().with_token("t").with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(config.timeout, 5);
    }
}
