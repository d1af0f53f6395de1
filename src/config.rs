//! Configuration management for the file store
//!
//! Loads the store root from an optional `file_store.toml` with environment
//! overrides (`FILE_STORE_ROOT_DIR`).

use config::{Config, ConfigError, Environment, File, FileFormat, FileSourceFile};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "file_store";
const DEFAULT_ROOT_DIR: &str = "./store_root";
const ENV_PREFIX: &str = "FILE_STORE";

/// Store configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory the store is confined to
    /// Environment: FILE_STORE_ROOT_DIR
    pub root_dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root_dir: DEFAULT_ROOT_DIR.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from `file_store.toml` if present, with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_in(".")
    }

    /// Load configuration from `file_store.toml` in `dir` if present, with environment overrides
    pub fn load_in(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::build(
            Self::optional_file(dir.as_ref()),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Load configuration from an explicit file, with environment overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::build(
            File::from(path.as_ref()).required(true),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn optional_file(dir: &Path) -> File<FileSourceFile, FileFormat> {
        File::with_name(&dir.join(DEFAULT_CONFIG_FILE).to_string_lossy()).required(false)
    }

    fn build<S>(file: S, env: Environment) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("root_dir", DEFAULT_ROOT_DIR)?
            .add_source(file)
            .add_source(env)
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.root_dir.trim().is_empty() {
            return Err(ConfigError::Message("root_dir cannot be empty".into()));
        }
        Ok(())
    }

    /// Get the root directory as PathBuf
    pub fn root_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.root_dir)
    }
}
