use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::paths::PathManager;

/// Optional settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Home directory to use when `HOME` is not set
    pub home_dir: Option<PathBuf>,
    /// Print the welcome banner before the first prompt
    pub show_welcome: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_dir: None,
            show_welcome: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the explicit file if given, else the default location. Problems
    /// are logged and the defaults used; a missing default file is normal.
    pub fn load(explicit: Option<&Path>, paths: &PathManager) -> Self {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => match paths.config_file() {
                Some(path) => (path, false),
                None => return Self::default(),
            },
        };

        if !required && !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{}; using defaults", err);
                Self::default()
            }
        }
    }
}
