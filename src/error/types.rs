//! Error types
//!
//! Defines the error taxonomy returned by file store operations.

use std::fmt;
use std::io;

/// File store errors
#[derive(Debug)]
pub enum StoreError {
    InvalidFilename(String),
    AlreadyExists(String),
    NotFound(String),
    AccessDenied(String),
    IoError(io::Error),
}

impl StoreError {
    /// Filename the error refers to, if any
    pub fn filename(&self) -> Option<&str> {
        match self {
            StoreError::InvalidFilename(name)
            | StoreError::AlreadyExists(name)
            | StoreError::NotFound(name)
            | StoreError::AccessDenied(name) => Some(name),
            StoreError::IoError(_) => None,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidFilename(n) => write!(f, "Invalid filename: {:?}", n),
            StoreError::AlreadyExists(n) => write!(f, "File already exists: {}", n),
            StoreError::NotFound(n) => write!(f, "File not found: {}", n),
            StoreError::AccessDenied(n) => write!(f, "Access denied: {}", n),
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::IoError(error)
    }
}
