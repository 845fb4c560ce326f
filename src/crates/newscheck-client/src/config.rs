//! Client configuration for the prediction service.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "NEWSCHECK_API_URL";

/// Default base URL for a locally running service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the service, without the `/api/v1` suffix.
    pub base_url: String,

    /// Request timeout duration.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration for the given base URL.
    ///
    /// A trailing slash is stripped so endpoint paths can be appended
    /// uniformly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: default_timeout(),
        }
    }

    /// Create configuration from the environment.
    ///
    /// Reads [`BASE_URL_ENV`], falling back to [`DEFAULT_BASE_URL`] when it
    /// is unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}
