use serde::{Deserialize, Serialize};

use super::api::ApiConfig;
use super::errors::ConfigError;
use super::logging::{LogFormat, LoggingConfig};
use super::presentation::PresentationConfig;
use super::watcher::WatcherConfig;

/// Main configuration structure for the DNS console
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ConsoleConfig {
    /// Remote API location and request limits
    #[serde(default)]
    pub api: ApiConfig,

    /// Filter-update polling
    #[serde(default)]
    pub watcher: WatcherConfig,

    #[serde(default)]
    pub presentation: PresentationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConsoleConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-console.toml in current directory
    /// 3. /etc/dns-console/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("dns-console.toml").exists() {
            Self::from_file("dns-console.toml")?
        } else if std::path::Path::new("/etc/dns-console/config.toml").exists() {
            Self::from_file("/etc/dns-console/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(base_url) = overrides.base_url {
            self.api.base_url = base_url;
        }
        if let Some(token) = overrides.token {
            self.api.token = Some(token);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation("API base URL cannot be empty".to_string()));
        }

        if self.api.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Request timeout cannot be 0".to_string(),
            ));
        }

        if self.watcher.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "Watcher poll interval cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}
