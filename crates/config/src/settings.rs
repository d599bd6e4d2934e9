//! Configuration structures for stagehand settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Library configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Panel exclusion policy overrides
    #[serde(default)]
    pub policy: PolicySettings,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional; in-memory only when absent)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Entries retained for the debug console tail
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

/// Panel exclusion policy overrides.
///
/// Keys and values are panel kind names (`main_menu`, `settings`, ...).
/// An empty table keeps the built-in policy. A non-empty table replaces
/// it wholesale; invalid entries are dropped with a logged warning when
/// the policy is built, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicySettings {
    /// showing `key` hides every kind in the value list
    #[serde(default)]
    pub rules: BTreeMap<String, Vec<String>>,
}

impl PolicySettings {
    /// Whether any override rules are present.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// Default value functions for serde
fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

// Default implementations
impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}
