//! Server configuration parsing.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use crate::squirrel::IdPolicy;

/// Server configuration loaded from a TOML file.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Server settings.
    pub server: ServerConfig,
    /// Backing store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server bind settings.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1" or "0.0.0.0").
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
}

/// Squirrel store settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the collection file. Created empty if missing.
    pub path: String,
    /// Id assignment for new records.
    pub id_policy: IdPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: "squirrel_db.json".into(),
            id_policy: IdPolicy::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "squirrel_server=debug,tower_http=info".
    pub level: String,
    pub format: LogFormat,
    /// "stdout", "stderr", or a file path opened in append mode.
    pub output: String,
    /// ANSI colors (text format on a terminal only).
    pub color: bool,
    /// Include the event target.
    pub target: bool,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Text,
            output: "stderr".into(),
            color: true,
            target: false,
            timestamps: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        content.parse()
    }

    /// Get the socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }
}

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(String, std::io::Error),
    /// TOML parse error.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Failed to read config file '{}': {}", path, e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
