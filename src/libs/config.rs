//! Application configuration.
//!
//! Settings live in `config.json` inside the [`DataStorage`] directory. The
//! only setting today is the database location; it can also be overridden
//! per process with the `PROJECTS_DB` environment variable (a `.env` file in
//! the working directory is honoured too, see `main.rs`).
//!
//! ```rust,no_run
//! use projects::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("{}", config.database_path()?.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name inside the data directory.
pub const DB_FILE_NAME: &str = "projects.db";

/// Environment variable that overrides the configured database path.
pub const DB_PATH_ENV: &str = "PROJECTS_DB";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DatabaseConfig {
    /// Absolute or relative path of the SQLite file. `None` means the
    /// default file in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Reads the config file from the data directory, or returns the default
    /// configuration when no file exists yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&path)
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| msg_error_anyhow!(Message::ConfigSaveError(e.to_string())))
    }

    /// Removes the config file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Resolves the database file: `PROJECTS_DB`, then the configured path,
    /// then `projects.db` in the data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        match &self.database.path {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    /// Interactive setup wizard used by `projects init`.
    ///
    /// Starts from the current configuration so re-running it only changes
    /// what the user edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read()?;
        let current = config.database_path()?;

        msg_print!(Message::ConfigCurrentDatabase(current.display().to_string()), true);

        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(current.display().to_string())
            .interact_text()?;

        let path = PathBuf::from(path.trim());
        let default_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        config.database.path = if path == default_path { None } else { Some(path) };

        Ok(config)
    }
}
