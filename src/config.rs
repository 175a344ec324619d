//! Configuration management for dialout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the campaign backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory scanned for lead CSV files.
    #[serde(default = "default_leads_dir")]
    pub leads_dir: PathBuf,

    /// Poll interval in milliseconds for the terminal event loop.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Global timeout for backend requests, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_leads_dir() -> PathBuf {
    PathBuf::from(".")
}

const fn default_poll_interval() -> u64 {
    100
}

const fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            leads_dir: default_leads_dir(),
            poll_interval_ms: default_poll_interval(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a specific path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dialout")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.leads_dir, PathBuf::from("."));
        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn save_and_load_round_trip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");

        let config = Config {
            base_url: "http://backend.example:9000".to_string(),
            leads_dir: temp_dir.path().join("leads"),
            poll_interval_ms: 200,
            request_timeout_secs: 5,
        };

        config.save_to(&config_path)?;
        let loaded = Config::load_from(&config_path)?;

        assert_eq!(config, loaded);
        Ok(())
    }

    #[test]
    fn load_nonexistent_path_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.json");

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn serde_defaults_fill_missing_fields() -> Result<()> {
        let json = r#"{"base_url": "http://10.0.0.1:8000"}"#;
        let config: Config = serde_json::from_str(json)?;

        assert_eq!(config.base_url, "http://10.0.0.1:8000");
        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.leads_dir, PathBuf::from("."));
        Ok(())
    }

    #[test]
    fn save_creates_parent_dirs() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let nested_path = temp_dir.path().join("deep/nested/config.json");

        Config::default().save_to(&nested_path)?;
        assert!(nested_path.exists());
        Ok(())
    }

    #[test]
    fn default_path_is_under_dialout() {
        let path = Config::default_path();
        assert!(path.to_string_lossy().contains("dialout"));
    }
}
