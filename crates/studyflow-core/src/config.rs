//! TOML-based application configuration.
//!
//! Stores the study-rule constants:
//! - Focus countdown length (minutes)
//! - Minimum minutes for a session to count as a deep block
//! - Reminder poll period
//! - Daily memo character cap
//!
//! Configuration is stored at `~/.config/studyflow/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::storage::data_dir;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studyflow/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Length of one focus countdown in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// A logged session of at least this many minutes counts as deep.
    #[serde(default = "default_deep_minutes")]
    pub deep_minutes: u32,
    /// How often hosts should poll the reminder watcher, in seconds.
    #[serde(default = "default_reminder_poll_secs")]
    pub reminder_poll_secs: u64,
    /// Maximum characters kept in a daily memo.
    #[serde(default = "default_memo_char_limit")]
    pub memo_char_limit: usize,
}

fn default_focus_minutes() -> u32 {
    45
}
fn default_deep_minutes() -> u32 {
    25
}
fn default_reminder_poll_secs() -> u64 {
    30
}
fn default_memo_char_limit() -> usize {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            deep_minutes: default_deep_minutes(),
            reminder_poll_secs: default_reminder_poll_secs(),
            memo_char_limit: default_memo_char_limit(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing and returning the default when absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
