//! Client configuration
//!
//! `ClientConfig` is deserialised from YAML, with every field optional.
//! Precedence, lowest to highest: built-in defaults, config file,
//! `WLPS_BASE_URL` environment variable, command-line flags.

use crate::error::{Error, Result};
use crate::http::{HttpTransportConfig, RateLimiterConfig};
use crate::types::{LogLevel, StringMap};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "http://api.welovepublicservice.se";

/// Environment variable that overrides the configured base URL
pub const BASE_URL_ENV: &str = "WLPS_BASE_URL";

/// Configuration for connecting to the catalog API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API host, without the `/v1/` discovery path
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,

    /// Extra headers sent with every request
    pub headers: StringMap,

    /// Optional client-side request throttling
    pub rate_limit: Option<RateLimiterConfig>,

    /// Default log level for the binary
    pub log_level: LogLevel,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: format!("wlps-client/{}", env!("CARGO_PKG_VERSION")),
            headers: StringMap::new(),
            rate_limit: None,
            log_level: LogLevel::default(),
        }
    }
}

impl ClientConfig {
    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse a config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using a custom variable lookup
    #[must_use]
    pub fn with_env_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Set the rate limit
    #[must_use]
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.rate_limit = Some(config);
        self
    }

    /// Check that the config describes a usable client
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Transport settings derived from this config
    pub fn transport(&self) -> HttpTransportConfig {
        HttpTransportConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
            default_headers: self.headers.clone(),
            rate_limit: self.rate_limit.clone(),
        }
    }
}
