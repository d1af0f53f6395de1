//! Storage operations
//!
//! Create, read, update and delete for single files directly under a root
//! directory. Every function validates the filename before any filesystem
//! call and opens and closes its own handle.

use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::StoreError;
use crate::error::handlers::classify_io_error;
use crate::storage::validation::resolve_file_path;

/// Creates a new file, failing if it already exists
pub fn create_file(root: &Path, filename: &str, content: &[u8]) -> Result<(), StoreError> {
    let file_path = resolve_file_path(root, filename)?;

    // create_new makes the existence check and the creation one step
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&file_path)
        .map_err(|e| classify_io_error(e, filename, root))?;

    if let Err(e) = file.write_all(content).and_then(|_| file.flush()) {
        drop(file);
        let _ = fs::remove_file(&file_path);
        return Err(classify_io_error(e, filename, root));
    }

    debug!(
        "Created file {} ({} bytes, real: {})",
        filename,
        content.len(),
        file_path.display()
    );
    Ok(())
}

/// Reads the full content of an existing file
pub fn read_file(root: &Path, filename: &str) -> Result<Vec<u8>, StoreError> {
    let file_path = resolve_file_path(root, filename)?;

    let content = fs::read(&file_path).map_err(|e| classify_io_error(e, filename, root))?;

    debug!("Read file {} ({} bytes)", filename, content.len());
    Ok(content)
}

/// Replaces the content of an existing file
pub fn update_file(root: &Path, filename: &str, content: &[u8]) -> Result<(), StoreError> {
    let file_path = resolve_file_path(root, filename)?;

    // No create flag: a missing file fails instead of appearing
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(&file_path)
        .map_err(|e| classify_io_error(e, filename, root))?;

    file.write_all(content)
        .and_then(|_| file.flush())
        .map_err(|e| classify_io_error(e, filename, root))?;

    debug!("Updated file {} ({} bytes)", filename, content.len());
    Ok(())
}

/// Deletes an existing file
pub fn delete_file(root: &Path, filename: &str) -> Result<(), StoreError> {
    let file_path = resolve_file_path(root, filename)?;

    fs::remove_file(&file_path).map_err(|e| classify_io_error(e, filename, root))?;

    debug!("Deleted file {} (real: {})", filename, file_path.display());
    Ok(())
}
