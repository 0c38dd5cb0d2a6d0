//! Public API types for the sha2mac library
//!
//! This crate provides the public surface shared by every sha2mac component:
//! the error taxonomy and the small enums that name hash variants, output
//! formats and input encodings.
//!
//! Without the default `std` feature the crate is `no_std` and needs only
//! `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::{EncodingConfig, InputEncoding, OutputFormat, Variant};
