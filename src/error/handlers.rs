//! Error handlers
//!
//! Converts raw filesystem errors into store errors.

use std::io::{self, ErrorKind};
use std::path::Path;

use crate::error::types::StoreError;

/// Classify an OS error raised while operating on `filename` inside `root`.
///
/// A missing file is only reported as `NotFound` while the root itself is a
/// directory. Otherwise the failure belongs to the root and stays an I/O error.
pub fn classify_io_error(err: io::Error, filename: &str, root: &Path) -> StoreError {
    match err.kind() {
        ErrorKind::NotFound if root.is_dir() => StoreError::NotFound(filename.to_string()),
        ErrorKind::NotFound => StoreError::IoError(io::Error::new(
            ErrorKind::NotFound,
            format!("root directory unavailable: {}", root.display()),
        )),
        ErrorKind::AlreadyExists => StoreError::AlreadyExists(filename.to_string()),
        ErrorKind::PermissionDenied => StoreError::AccessDenied(filename.to_string()),
        _ => StoreError::from(err),
    }
}
