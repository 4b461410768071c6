//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::Result;

/// File name of the user configuration inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loads configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `<data_dir>/config.yaml` if it exists.
    ///
    /// When `data_dir` is `None` the resolved data directory is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(data_dir: Option<&Path>) -> Result<Option<Config>> {
        let path = Self::user_config_path(data_dir)?;
        if !path.exists() {
            return Ok(None);
        }

        log::debug!("loading configuration from {}", path.display());
        Self::load_file(&path).map(Some)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is treated as an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Returns the path of the user configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory is given and the default one
    /// cannot be determined.
    pub fn user_config_path(data_dir: Option<&Path>) -> Result<PathBuf> {
        let dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => crate::database::resolve_data_dir()?,
        };
        Ok(dir.join(CONFIG_FILE_NAME))
    }
}
