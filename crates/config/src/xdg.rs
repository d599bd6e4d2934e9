//! XDG Base Directory support for stagehand.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "stagehand";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/stagehand` or `~/.config/stagehand`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the data directory following XDG conventions.
///
/// Returns `$XDG_DATA_HOME/stagehand` or `~/.local/share/stagehand`.
/// Log files default to this directory.
pub fn get_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine data directory")
}
