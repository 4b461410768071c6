//! Layered configuration builder.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a [`Config`] from defaults, the user file, the environment and
/// programmatic overrides, in increasing precedence.
///
/// # Examples
///
/// ```
/// use seatbook::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         busy_timeout_seconds: Some(2),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.busy_timeout_seconds, Some(2));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads the default data directory and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `config.yaml` from this directory instead of the default one.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Skips configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds a programmatic override with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Builds the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or invalid, or an
    /// environment override has an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(file) = ConfigLoader::load_user_config(self.data_dir.as_deref())? {
                config.merge(file);
            }
        }

        if !self.skip_env {
            let mut env_layer = Config::default();
            EnvironmentConfig::apply_overrides(&mut env_layer)?;
            config.merge(env_layer);
        }

        for layer in self.overrides {
            config.merge(layer);
        }

        Ok(config)
    }
}
