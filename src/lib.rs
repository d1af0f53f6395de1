//! Flat file store
//!
//! Create, read, update and delete files that live directly inside one root
//! directory. Filenames are validated and confined to the root before any
//! filesystem call is made.

pub mod config;
pub mod error;
pub mod storage;

pub use crate::config::StoreConfig;
pub use error::StoreError;
pub use storage::FileStore;
