use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::{DEFAULT_PLACEHOLDER_IMAGE, DEFAULT_SNAPSHOT_KEY};
use crate::error::{ConfigError, StorageError};
use crate::photo::DEFAULT_MAX_IMAGE_BYTES;
use crate::storage::sqlite;

/// Settings from `config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// SQLite file holding the snapshot. Defaults to the platform data dir.
    pub database: Option<PathBuf>,
    pub snapshot_key: String,
    pub placeholder_image: String,
    pub max_image_bytes: u64,
    /// Largest snapshot the store accepts, like a browser storage quota.
    pub quota_bytes: Option<usize>,
    pub recent_limit: usize,
    #[serde(skip)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            quota_bytes: None,
            recent_limit: 5,
            verbose: false,
        }
    }
}

impl Config {
    /// ~/.config/kicks/config.toml or platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "kicks")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from `explicit` if given (it must exist), otherwise from the
    /// default location, falling back to defaults when there is no file.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Config::default()),
            },
        };

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let config = Self::parse(&text, &path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn database_path(&self) -> Result<PathBuf, StorageError> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => sqlite::default_db_path(),
        }
    }
}
