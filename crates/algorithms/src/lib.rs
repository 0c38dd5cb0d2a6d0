//! SHA-224 / SHA-256 and HMAC primitives
//!
//! This crate holds the computation core of sha2mac: the bit-exact message
//! container, the FIPS 180-4 padder and compression function, the typed
//! digest value, and the HMAC construction on top of them.
//!
//! Intermediate values (message schedules, working variables, HMAC pads) live
//! in zeroizing containers from `sha2mac-common`.
//!
//! The default `std` feature adds `std::error::Error` for [`Error`]; without
//! it the crate is `no_std` and needs only `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Bit-level message container
pub mod bits;
pub use bits::BitBuffer;

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha224, Sha256};

// MAC implementations
pub mod mac;
pub use mac::{hmac, Hmac};

// Typed outputs
pub mod types;
pub use types::Digest;

pub use sha2mac_api::Variant;
