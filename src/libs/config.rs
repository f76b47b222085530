//! Tool settings for folder-sync.
//!
//! The configuration is a small JSON document stored next to the pair
//! registry in the per-user data directory. It only describes how rclone is
//! invoked; the pairs themselves live in [`PairStore`](super::pair::PairStore).
//!
//! ```json
//! {
//!   "rclone": {
//!     "binary": "rclone",
//!     "progress": true,
//!     "timeout_secs": null
//!   }
//! }
//! ```
//!
//! A missing file is not an error: [`Config::read`] falls back to the
//! defaults so the tool works without any setup.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// How the rclone executable is invoked.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RcloneConfig {
    /// Executable name or path, looked up on PATH.
    pub binary: String,

    /// Pass `-P` to transfers so rclone shows live progress.
    pub progress: bool,

    /// Kill a transfer that runs longer than this many seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for RcloneConfig {
    fn default() -> Self {
        RcloneConfig {
            binary: "rclone".to_string(),
            progress: true,
            timeout_secs: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub rclone: RcloneConfig,
}

impl Config {
    /// Loads the configuration from the data directory, or defaults if absent.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file; returns whether one existed.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.rclone.clone();

        msg_print!(Message::ConfigModuleRclone);
        let binary: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRcloneBinary.to_string())
            .default(default.binary)
            .interact_text()?;

        let progress = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptShowProgress.to_string())
            .default(default.progress)
            .interact()?;

        let timeout: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimeout.to_string())
            .default(default.timeout_secs.unwrap_or(0))
            .interact_text()?;

        config.rclone = RcloneConfig {
            binary,
            progress,
            timeout_secs: (timeout > 0).then_some(timeout),
        };

        Ok(config)
    }
}
