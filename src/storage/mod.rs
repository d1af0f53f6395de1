//! File system storage
//!
//! Handles file operations and path validation for the store.

pub mod operations;
pub mod store;
pub mod validation;

pub use store::FileStore;
pub use validation::{resolve_file_path, validate_filename};
