//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.
//!
//! Pastebin credentials are not part of it: they are read from the
//! environment on every tool call by
//! [`EnvCredentials`](crate::domains::pastebin::EnvCredentials).

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::pastebin::Credential;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Default form-POST endpoint of the Pastebin API.
pub const DEFAULT_API_URL: &str = "https://pastebin.com/api/api_post.php";

/// Default site root; pastes live at `{base}/{key}` and `{base}/raw/{key}`.
pub const DEFAULT_BASE_URL: &str = "https://pastebin.com";

/// Timeout applied to every Pastebin request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Pastebin endpoints and request policy.
    pub pastebin: PastebinConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Pastebin endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PastebinConfig {
    /// URL of `api_post.php`.
    pub api_url: String,

    /// Site root used for raw-content and public page URLs.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for PastebinConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl PastebinConfig {
    /// Reject settings the HTTP client cannot work with.
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [("api_url", &self.api_url), ("base_url", &self.base_url)] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(Error::config(format!(
                    "pastebin.{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        if self.timeout.is_zero() {
            return Err(Error::config("pastebin.timeout must be greater than zero"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "pastebin-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            pastebin: PastebinConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...). Pastebin endpoints can be
    /// overridden with `PASTEBIN_API_URL` and `PASTEBIN_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(api_url) = std::env::var("PASTEBIN_API_URL") {
            info!("Pastebin API endpoint overridden: {}", api_url);
            config.pastebin.api_url = api_url;
        }

        if let Ok(base_url) = std::env::var("PASTEBIN_BASE_URL") {
            info!("Pastebin base URL overridden: {}", base_url);
            config.pastebin.base_url = base_url;
        }

        config
    }

    /// Log a warning for each Pastebin credential missing from the environment.
    ///
    /// Credentials are only checked here, never stored; tools read them again
    /// on every call.
    pub fn warn_missing_credentials(&self) {
        for credential in [Credential::DeveloperKey, Credential::UserKey] {
            let present = std::env::var(credential.env_var())
                .map(|v| !v.trim().is_empty())
                .unwrap_or(false);
            if !present {
                warn!(
                    "{} not set - tools needing it will fail until it is provided",
                    credential.env_var()
                );
            }
        }
    }

    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }
        self.pastebin.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "pastebin-mcp-server");
        assert_eq!(config.pastebin.api_url, DEFAULT_API_URL);
        assert_eq!(config.pastebin.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.pastebin.timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoints_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("PASTEBIN_API_URL", "http://localhost:9000/api/api_post.php");
            std::env::set_var("PASTEBIN_BASE_URL", "http://localhost:9000");
        }
        let config = Config::from_env();
        assert_eq!(config.pastebin.api_url, "http://localhost:9000/api/api_post.php");
        assert_eq!(config.pastebin.base_url, "http://localhost:9000");
        unsafe {
            std::env::remove_var("PASTEBIN_API_URL");
            std::env::remove_var("PASTEBIN_BASE_URL");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "my-pastes");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "my-pastes");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.pastebin.api_url = "ftp://pastebin.com/api".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("api_url"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.pastebin.timeout = Duration::ZERO;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
