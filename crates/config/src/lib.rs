//! Configuration management for stagehand.
//!
//! This crate provides configuration loading and saving with TOML
//! format and XDG directory conventions. Missing keys are completed
//! with defaults and written back, so a config file from an older
//! version upgrades itself on load.

mod settings;
mod xdg;

pub use settings::{Config, LoggingSettings, PolicySettings};
pub use xdg::{get_config_dir, get_data_dir};

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    /// Config file name inside the XDG config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";
    /// Log file name inside the XDG data directory
    pub const LOG_FILE_NAME: &str = "stagehand.log";
    /// Minimum log level recorded
    pub const MIN_LOG_LEVEL: &str = "info";
    /// Log entries retained for the debug console
    pub const MAX_LOG_ENTRIES: usize = 400;
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// On first run, creates the config file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path.
    ///
    /// Auto-completes missing keys with default values and re-saves the
    /// normalized file when anything was missing or reordered.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let original_content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&original_content)?;

            let normalized_content = toml::to_string_pretty(&config)?;
            if original_content != normalized_content {
                config.save_to(path)?;
            }

            Ok(config)
        } else {
            // First run - create config file with default values
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path of the config file in the XDG config directory.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join(defaults::CONFIG_FILE_NAME))
    }

    /// Default log file path in the XDG data directory.
    pub fn default_log_path() -> Result<PathBuf> {
        Ok(get_data_dir()?.join(defaults::LOG_FILE_NAME))
    }
}
