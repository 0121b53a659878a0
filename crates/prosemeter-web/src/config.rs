//! Application configuration.
//!
//! Loaded from an optional TOML file; every field has a default so the
//! server runs with no config file at all. Upstream HTTP settings live in
//! the shared [`HttpConfig`] section and are handed to each client at
//! startup.

use std::path::Path;

use prosemeter_client::HttpConfig;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:4567";

/// Top-level application configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Socket address the server listens on.
    pub bind: String,
    /// Upstream HTTP client settings (`[http]` table).
    pub http: HttpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content).map_err(|e| {
                    Error::config(format!("failed to parse {}: {e}", path.display()))
                })
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load(None).expect("defaults load");
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.http.timeout_secs, 10);
    }

    #[test]
    fn test_parses_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            bind = "0.0.0.0:8080"

            [http]
            timeout_secs = 3
            "#,
        )
        .expect("partial config parses");
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.http.timeout_secs, 3);
        // Unset fields keep their defaults
        assert!(config.http.advice_url.contains("adviceslip.com"));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let parsed = toml::from_str::<AppConfig>("listen = \"nope\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/prosemeter.toml")));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
