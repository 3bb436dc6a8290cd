//! Configuration module for the shipping bridge

use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};
use std::path::PathBuf;
use std::time::Duration;

/// Default ShipRocket API host
pub const DEFAULT_SHIPROCKET_BASE_URL: &str = "https://apiv2.shiprocket.in";

/// Main application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub shiprocket: ShiprocketSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

/// ShipRocket API client configuration
///
/// Account credentials are not part of this struct: they are read from
/// `SHIPROCKET_EMAIL` / `SHIPROCKET_PASSWORD` every time a token is requested.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiprocketSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. Unset means no client-side timeout.
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_base_url() -> String { DEFAULT_SHIPROCKET_BASE_URL.to_string() }
fn default_user_agent() -> String { format!("shiprocket-bridge/{}", env!("CARGO_PKG_VERSION")) }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables (prefixed with BRIDGE_)
    /// 2. config/local.toml (gitignored)
    /// 3. config/default.toml
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = std::env::var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"));

        let builder = Config::builder()
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // BRIDGE_SERVER__PORT, BRIDGE_SHIPROCKET__BASE_URL, etc.
            .add_source(
                Environment::with_prefix("BRIDGE")
                    .separator("__")
                    .try_parsing(true)
            );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that cannot produce a working carrier client
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.shiprocket.base_url)
            .map_err(|e| ConfigError::Message(format!("invalid shiprocket.base_url: {}", e)))?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Message(
                "shiprocket.base_url must be an absolute http(s) URL".to_string(),
            ));
        }

        Ok(())
    }

    /// Number of actix workers to start
    pub fn workers(&self) -> usize {
        self.server.workers.unwrap_or_else(num_cpus::get).max(1)
    }
}

impl ShiprocketSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

impl Default for ShiprocketSettings {
    fn default() -> Self {
        ShiprocketSettings {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            server: ServerSettings::default(),
            shiprocket: ShiprocketSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.shiprocket.base_url, DEFAULT_SHIPROCKET_BASE_URL);
        assert!(settings.shiprocket.timeout().is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let mut settings = Settings::default();
        settings.shiprocket.base_url = "apiv2.shiprocket.in".to_string();

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut settings = Settings::default();

        for base_url in ["ftp://apiv2.shiprocket.in", "file:///tmp/x"] {
            settings.shiprocket.base_url = base_url.to_string();
            assert!(settings.validate().is_err(), "{} should be rejected", base_url);
        }

        settings.shiprocket.base_url = "http://127.0.0.1:8081".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_workers_never_zero() {
        let mut settings = Settings::default();
        settings.server.workers = Some(0);

        assert_eq!(settings.workers(), 1);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                "[shiprocket]\ntimeout_secs = 15\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.shiprocket.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(settings.shiprocket.base_url, DEFAULT_SHIPROCKET_BASE_URL);
    }
}
