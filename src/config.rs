//! Configuration loading and merging.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output settings.
    pub output: OutputConfig,

    /// Audit logging settings.
    pub audit: AuditConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON responses. Unset means compact.
    pub pretty: Option<bool>,
}

impl OutputConfig {
    /// Whether responses are pretty-printed.
    pub fn is_pretty(&self) -> bool {
        self.pretty.unwrap_or(false)
    }
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging. Unset means disabled.
    pub enabled: Option<bool>,
    /// Path to audit log file.
    pub path: Option<String>,
}

impl AuditConfig {
    /// Audit log path, if logging is enabled and a path is set.
    pub fn log_path(&self) -> Option<&str> {
        match self.enabled {
            Some(true) => self.path.as_deref(),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        if let Some(cwd) = cwd {
            if let Some(project_config) = Self::load_project_config(cwd)? {
                config.merge(project_config);
            }
        }

        Ok(config)
    }

    /// Parse a config from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load user-level config from ~/.config/shellwords.toml
    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        match Self::user_config_path() {
            Some(path) if path.exists() => Ok(Some(Self::parse(&fs::read_to_string(&path)?)?)),
            _ => Ok(None),
        }
    }

    /// Load project-level config from .shellwords.toml
    fn load_project_config(cwd: &Path) -> Result<Option<Self>, ConfigError> {
        let path = cwd.join(".shellwords.toml");
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(Self::parse(&content)?));
        }
        Ok(None)
    }

    /// Get user config path.
    /// Respects SHELLWORDS_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("SHELLWORDS_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|h| h.join(".config/shellwords.toml"))
    }

    /// Merge another config into this one (other takes precedence for scalars).
    fn merge(&mut self, other: Config) {
        if other.output.pretty.is_some() {
            self.output.pretty = other.output.pretty;
        }
        if other.audit.enabled.is_some() {
            self.audit.enabled = other.audit.enabled;
        }
        if other.audit.path.is_some() {
            self.audit.path = other.audit.path;
        }
    }
}
