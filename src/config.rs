//! Configuration management
//!
//! Loads the application identity from an optional `app-files.toml` layered
//! with `APP_FILES_*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::IdentityError;
use crate::identity::AppIdentity;
use crate::storage::AppFiles;

const DEFAULT_CONFIG_NAME: &str = "app-files";
const ENV_PREFIX: &str = "APP_FILES";

/// Identity the command-line tool operates on
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Environment: APP_FILES_APP_NAME
    pub app_name: String,

    /// Environment: APP_FILES_COMPANY_NAME
    pub company_name: String,

    /// Empty selects the platform data directory.
    /// Environment: APP_FILES_ROOT_DIR
    #[serde(default)]
    pub root_dir: String,
}

impl StoreConfig {
    /// Load from `./app-files.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name(DEFAULT_CONFIG_NAME).required(false))
    }

    /// Load from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("root_dir", "")?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::Message("app_name cannot be empty".into()));
        }

        if self.company_name.trim().is_empty() {
            return Err(ConfigError::Message("company_name cannot be empty".into()));
        }

        Ok(())
    }

    pub fn root_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.root_dir)
    }

    pub fn identity(&self) -> AppIdentity {
        AppIdentity::new(&self.app_name, &self.company_name, self.root_dir_path())
    }

    /// Construct the store this configuration describes
    pub fn open(&self) -> Result<AppFiles, IdentityError> {
        AppFiles::from_identity(&self.identity())
    }
}
