//! Error handling for session operations
//!
//! Sessions report the public API error; primitive failures from the
//! compression core are converted on the way out.

pub use sha2mac_api::error::{Error, Result, KEY_CONTEXT, MESSAGE_CONTEXT};

use sha2mac_algorithms::error::Error as PrimitiveError;

/// Extension trait for converting primitive results
pub trait SessionResultExt<T> {
    /// Convert a Result with PrimitiveError to a Result with API Error
    fn map_primitive_err(self) -> Result<T>;
}

impl<T> SessionResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(Error::from)
    }
}
