//! Application configuration model.
//!
//! The configuration file lives at `~/.config/somaleo/config.toml` and is
//! loaded by the infrastructure layer. Missing files and missing fields fall
//! back to the defaults below.

use serde::{Deserialize, Serialize};
use std::env;

/// Default base URL of the tutor backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the configured base URL.
pub const API_URL_ENV: &str = "SOMALEO_API_URL";

/// Root of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RootConfig {
    pub api: ApiConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are joined to.
    pub base_url: String,
    /// Client-wide request timeout; individual requests carry no extra
    /// deadline of their own.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// The effective base URL: the `SOMALEO_API_URL` environment variable
    /// wins over the configured value.
    pub fn resolved_base_url(&self) -> String {
        env::var(API_URL_ENV).unwrap_or_else(|_| self.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_localhost() {
        let config = RootConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: RootConfig = toml::from_str("[api]\nbase_url = \"http://example.test/api\"\n")
            .unwrap();
        assert_eq!(config.api.base_url, "http://example.test/api");
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
    }
}
