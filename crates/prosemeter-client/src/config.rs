//! Shared HTTP client configuration.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Deserialize;

use crate::Result;

/// Default per-call timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default dictionary API base URL (word is appended as a path segment).
pub const DEFAULT_DICTIONARY_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Default random-advice API URL.
pub const DEFAULT_ADVICE_URL: &str = "https://api.adviceslip.com/advice";

/// Configuration shared by both upstream clients.
///
/// Passed by value into each client; there is no process-global client
/// state. The URLs are overridable so tests can point at a local mock
/// server.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
    /// Base URL for word-definition lookups.
    pub dictionary_base_url: String,
    /// URL for random-advice fetches.
    pub advice_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            dictionary_base_url: DEFAULT_DICTIONARY_BASE_URL.to_string(),
            advice_url: DEFAULT_ADVICE_URL.to_string(),
        }
    }
}

impl HttpConfig {
    /// The configured timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a `reqwest::Client` with the configured timeout and a JSON
    /// `Accept` header. One client is shared by both upstream callers.
    pub fn build_client(&self) -> Result<reqwest::Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(self.timeout())
            .default_headers(headers)
            .build()?;
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.dictionary_base_url.contains("dictionaryapi.dev"));
        assert!(config.advice_url.contains("adviceslip.com"));
    }

    #[test]
    fn test_builds_client() {
        let config = HttpConfig::default();
        assert!(config.build_client().is_ok());
    }
}
