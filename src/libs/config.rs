//! Configuration for the tack application.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. `config.json` in the application data directory (or built-in defaults
//!    when the file does not exist),
//! 2. the `TACK_DB` environment variable, which may also be set in a `.env`
//!    file in the working directory,
//! 3. the `--db` command-line flag.
//!
//! The merged [`Config`] is built once in `main` and handed to each command
//! by reference; nothing reads configuration from global state.
//!
//! ```rust,no_run
//! use tack::libs::config::Config;
//!
//! let config = Config::read()?.apply_env().with_db_path(None);
//! let tasks = config.tasks();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::formatter::OutputFormat;
use super::messages::Message;
use crate::db::db::{Db, DB_FILE_NAME};
use crate::db::tasks::Tasks;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Loads `.env` from the working directory, if there is one, into the process
/// environment. Variables that are already set keep their values.
///
/// Must run before anything reads `TACK_DEBUG`, which is cached on first use.
pub fn load_env() {
    let _ = dotenv::dotenv();
}

/// [`load_env`] for an explicit file.
pub fn load_env_from(path: &Path) {
    let _ = dotenv::from_path(path);
}

/// Environment variable naming the database file.
pub const DB_ENV_VAR: &str = "TACK_DB";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Database file; `None` means `<data dir>/tack/tack.db`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Format used by `search` when `-o` is not given.
    pub search_output_format: OutputFormat,

    /// Format used by `show` when `-o` is not given.
    pub show_output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: None,
            search_output_format: OutputFormat::Oneline,
            show_output_format: OutputFormat::Short,
        }
    }
}

impl Config {
    pub fn file_path() -> PathBuf {
        DataStorage::new().path_of(CONFIG_FILE_NAME)
    }

    /// Reads the user's configuration file, or defaults if there is none.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::file_path())
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Applies `TACK_DB`, loading `.env` first if one is present.
    pub fn apply_env(mut self) -> Self {
        load_env();
        if let Some(db_path) = env::var_os(DB_ENV_VAR).filter(|v| !v.is_empty()) {
            self.db_path = Some(PathBuf::from(db_path));
        }
        self
    }

    /// Overrides the database location when `db_path` is `Some`.
    pub fn with_db_path(mut self, db_path: Option<PathBuf>) -> Self {
        if db_path.is_some() {
            self.db_path = db_path;
        }
        self
    }

    pub fn db_location(&self) -> PathBuf {
        self.db_path.clone().unwrap_or_else(|| DataStorage::new().path_of(DB_FILE_NAME))
    }

    pub fn db(&self) -> Db {
        Db::new(self.db_location())
    }

    pub fn tasks(&self) -> Tasks {
        Tasks::new(self.db())
    }
}
