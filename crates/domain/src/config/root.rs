use super::{CacheConfig, ConfigError, IpamConfig, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ipam: IpamConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub token: Option<String>,
    pub cache_ttl: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from `path` (or defaults when `None`) and apply
    /// CLI overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(url) = overrides.url {
            self.ipam.url = url;
        }
        if let Some(token) = overrides.token {
            self.ipam.token = token;
        }
        if let Some(ttl) = overrides.cache_ttl {
            self.ipam.cache_ttl = ttl;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ipam.url.is_empty() {
            return Err(ConfigError::Validation("ipam.url is required".to_string()));
        }
        if !self.ipam.url.starts_with("http://") && !self.ipam.url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "ipam.url must start with http:// or https:// (got {})",
                self.ipam.url
            )));
        }
        if self.ipam.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "ipam.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.ipam.request_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "ipam.request_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?} (got {})",
                LOG_LEVELS, self.logging.level
            )));
        }
        Ok(())
    }
}
