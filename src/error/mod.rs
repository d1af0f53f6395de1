//! Error handling
//!
//! Defines error types and the mapping from OS errors into them.

pub mod handlers;
pub mod types;

pub use types::*;
