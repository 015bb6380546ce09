//! Client configuration from TOML with environment overrides.
//!
//! A `mecabal.toml` file provides defaults; `MECABAL_API_URL` and
//! `MECABAL_API_TOKEN` override it so CI and local shells can point
//! at different backends without editing files.

use serde::Deserialize;
use thiserror::Error;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`crate::ApiClient`].
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL (e.g. `https://api.mecabal.com`).
    pub base_url: String,
    /// Bearer token to start with, if already authenticated.
    pub access_token: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

const fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Errors loading client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file was not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// No base URL in the file or the environment.
    #[error("No backend base URL configured (set base_url or MECABAL_API_URL)")]
    MissingBaseUrl,
}

impl ClientConfig {
    /// Builds a config with just a base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] on malformed TOML.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::de::from_str(raw)?)
    }

    /// Loads configuration from an optional TOML file, then applies
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read
    /// or parsed, or if no base URL is available from any source.
    pub fn load(path: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) if p.exists() => Self::from_toml(&std::fs::read_to_string(p)?)?,
            _ => Self {
                base_url: String::new(),
                access_token: None,
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
        };

        if let Ok(url) = std::env::var("MECABAL_API_URL") {
            config.base_url = url;
        }
        if let Ok(token) = std::env::var("MECABAL_API_TOKEN") {
            config.access_token = Some(token);
        }

        if config.base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_toml() {
        let config = ClientConfig::from_toml("base_url = \"https://api.mecabal.test\"").unwrap();
        assert_eq!(config.base_url, "https://api.mecabal.test");
        assert!(config.access_token.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn parses_full_toml() {
        let config = ClientConfig::from_toml(
            "base_url = \"https://api.mecabal.test\"\n\
             access_token = \"tok\"\n\
             timeout_secs = 5\n",
        )
        .unwrap();
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            ClientConfig::from_toml("base_url = "),
            Err(ConfigError::Toml(_))
        ));
    }
}
