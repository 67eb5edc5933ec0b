//! Configuration loading
//!
//! YAML config with a fallback chain: explicit `--config` path, then the
//! `TABI_CONFIG` env var, then `$TABI_DIR/tabi.yaml`, then
//! `~/.config/tabi/tabi.yaml`, then `./tabi.yaml`, then built-in defaults.

#![allow(dead_code)]

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main tabi configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Path to a YAML catalog overriding the built-in extraction tables
    pub catalog: Option<PathBuf>,
    /// Log level when RUST_LOG is not set
    pub log_level: LogLevel,
}

/// Log level as written in the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Check TABI_CONFIG env var
        if let Ok(env_path) = std::env::var("TABI_CONFIG") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from TABI_CONFIG: {}", e);
                    }
                }
            }
        }

        // Try TABI_DIR/tabi.yaml
        if let Ok(tabi_dir) = std::env::var("TABI_DIR") {
            let path = PathBuf::from(tabi_dir).join("tabi.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from TABI_DIR: {}", e);
                    }
                }
            }
        }

        // Try ~/.config/tabi/tabi.yaml
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("tabi").join("tabi.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        // Try ./tabi.yaml (for development)
        let local_config = PathBuf::from("tabi.yaml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load local config: {}", e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Get the tabi directory (config, catalogs)
    pub fn tabi_dir() -> PathBuf {
        std::env::var("TABI_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("tabi"))
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }

    /// The catalog path with ~ and env vars expanded, if one is configured
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.as_ref().map(|p| Self::expand_path(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog.is_none());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_parse_config_yaml() {
        let config: Config = serde_yaml::from_str("catalog: catalog.yaml\nlog_level: debug\n").unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("catalog.yaml")));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("log_level: warn\n").unwrap();
        assert!(config.catalog.is_none());
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_log_level_as_filter() {
        assert_eq!(LogLevel::Info.as_filter(), "info");
        assert_eq!(LogLevel::Off.as_filter(), "off");
    }
}
