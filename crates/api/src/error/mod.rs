//! Error handling for the sha2mac ecosystem

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result, KEY_CONTEXT, MESSAGE_CONTEXT};
