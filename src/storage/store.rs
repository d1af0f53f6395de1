//! Directory-scoped file store
//!
//! [`FileStore`] confines create, read, update and delete to the files that
//! sit directly inside one root directory. The filesystem is the only source
//! of truth: the store keeps the root path and nothing else.

use log::info;
use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::storage::operations::{create_file, delete_file, read_file, update_file};
use crate::storage::validation::absolute_root;

/// A flat file store rooted at one directory
///
/// Cloning is cheap and clones share nothing but the root path. No locks or
/// handles are held between calls, so concurrent callers get exactly the
/// guarantees of the underlying filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store at `root`.
    ///
    /// The path is made absolute once, against the current working directory,
    /// so later `chdir` calls elsewhere in the process have no effect on it.
    /// The directory itself need not exist yet; operations fail until it does.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = absolute_root(root.as_ref())?;
        info!("File store root: {}", root.display());
        Ok(Self { root })
    }

    /// Opens a store at the configured root directory
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        Self::new(config.root_dir_path())
    }

    /// Absolute root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `content` to a new file. Fails with `AlreadyExists` rather than
    /// overwrite.
    pub fn create(&self, filename: &str, content: &[u8]) -> Result<(), StoreError> {
        create_file(&self.root, filename, content)
    }

    /// Returns the whole content of `filename`
    pub fn read(&self, filename: &str) -> Result<Vec<u8>, StoreError> {
        read_file(&self.root, filename)
    }

    /// Replaces the content of an existing file.
    ///
    /// A reader running at the same time may observe a partially written file.
    pub fn update(&self, filename: &str, content: &[u8]) -> Result<(), StoreError> {
        update_file(&self.root, filename, content)
    }

    /// Removes `filename`. Deleting a missing file is an error.
    pub fn delete(&self, filename: &str) -> Result<(), StoreError> {
        delete_file(&self.root, filename)
    }
}
