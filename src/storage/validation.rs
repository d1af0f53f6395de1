//! Path validation
//!
//! Handles filename validation and confinement of resolved paths to the
//! store root. This is the only place that deals with platform path rules.

use std::io;
use std::path::{Component, Path, PathBuf, is_separator};

use crate::error::StoreError;

/// Resolve `root` into an absolute, lexically normalized path.
///
/// Relative roots are joined to the current working directory. The directory
/// does not need to exist.
pub fn absolute_root(root: &Path) -> io::Result<PathBuf> {
    if root.as_os_str().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "root directory path is empty",
        ));
    }
    let absolute = std::path::absolute(root)?;
    Ok(normalize(&absolute))
}

/// Collapse `.` and `..` components without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() never removes the root itself
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Check that a filename names a single entry directly under a directory
pub fn validate_filename(filename: &str) -> Result<(), StoreError> {
    let invalid = || StoreError::InvalidFilename(filename.to_string());

    if filename.is_empty() || filename == "." || filename == ".." {
        return Err(invalid());
    }
    if filename.contains('\0') || filename.chars().any(|c| c == '/' || is_separator(c)) {
        return Err(invalid());
    }

    // Catches platform prefixes such as `C:name` on Windows
    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}

/// Join `filename` to `root` and verify the result is a direct child of `root`
pub fn resolve_file_path(root: &Path, filename: &str) -> Result<PathBuf, StoreError> {
    validate_filename(filename)?;

    let file_path = root.join(filename);
    if file_path.parent() != Some(root) {
        return Err(StoreError::InvalidFilename(filename.to_string()));
    }

    Ok(file_path)
}
