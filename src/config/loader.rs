//! HTTP client settings: defaults, environment overlay, and YAML file loading
//!
//! ## Features
//!
//! - **Defaults**: `https://api.github.com`, 10s connect timeout, 30s overall timeout
//! - **Environment**: `GH_API_URL`, `GH_CONNECT_TIMEOUT_SECS`, `GH_TIMEOUT_SECS`
//! - **Files**: the same fields from YAML; credentials are never read from disk
//!
//! ## Example
//!
//! ```rust
//! use gh_oauth::ClientConfig;
//! use std::time::Duration;
//!
//! let config = ClientConfig::default()
//!     .with_api_url("https://ghe.example.com/api/v3")
//!     .with_timeout(Duration::from_secs(60));
//! assert!(config.validate().is_ok());
//! ```

use crate::constants::{self, env, github};
use crate::utils::validators;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Settings shared by every HTTP client the crate builds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

/// On-disk shape of a config file; absent fields keep their defaults
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    connect_timeout_secs: Option<u64>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: github::API_BASE.to_string(),
            connect_timeout: constants::DEFAULT_CONNECT_TIMEOUT,
            timeout: constants::DEFAULT_TIMEOUT,
            user_agent: github::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Set the API base URL
    ///
    /// # Arguments
    /// * `api_url` - Absolute http(s) URL of the API root, e.g. a GitHub
    ///   Enterprise `https://host/api/v3` or a local test server. A trailing
    ///   slash is ignored.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set how long to wait for the TCP/TLS connection
    ///
    /// # Arguments
    /// * `timeout` - Non-zero connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the overall per-request timeout
    ///
    /// # Arguments
    /// * `timeout` - Non-zero timeout covering connect, send and body read
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header; GitHub rejects requests without one
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Defaults overlaid with `GH_API_URL`, `GH_CONNECT_TIMEOUT_SECS` and `GH_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(api_url) = std::env::var(env::API_URL) {
            config.api_url = api_url;
        }
        if let Some(secs) = read_secs(env::CONNECT_TIMEOUT_SECS)? {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = read_secs(env::TIMEOUT_SECS)? {
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    ///
    /// # Arguments
    /// * `path` - YAML file with any of `api_url`, `connect_timeout_secs`,
    ///   `timeout_secs` and `user_agent`
    ///
    /// # Errors
    /// I/O error when the file cannot be read, YAML error when it does not
    /// parse, configuration error when the resulting values are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_yaml::from_str(&content)?;

        let mut config = Self::default();
        if let Some(api_url) = file.api_url {
            config.api_url = api_url;
        }
        if let Some(secs) = file.connect_timeout_secs {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = file.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(user_agent) = file.user_agent {
            config.user_agent = user_agent;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the API URL is absolute http(s), timeouts are non-zero and the
    /// user agent is not blank
    pub fn validate(&self) -> Result<()> {
        validators::validate_api_url(&self.api_url)
            .map_err(|error| Error::Configuration(error.to_string()))?;
        if self.connect_timeout.is_zero() || self.timeout.is_zero() {
            return Err(Error::Configuration(
                "timeouts must be greater than zero".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::Configuration(
                "user agent cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Build a `reqwest` client carrying these settings
    pub(crate) fn http_client(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .build()?;
        Ok(client)
    }

    /// API base URL without a trailing slash
    pub(crate) fn base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

fn read_secs(name: &str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| Error::Configuration(format!("{} must be whole seconds, got '{}'", name, raw))),
        Err(_) => Ok(None),
    }
}
