//! # sha2mac
//!
//! SHA-224 and SHA-256 digests and HMAC over exact bit sequences.
//!
//! ## Usage
//!
//! ```
//! use sha2mac::prelude::*;
//!
//! let session = DigestSession::new("abc", InputEncoding::Ascii).unwrap();
//! assert_eq!(
//!     session.digest_by_name("SHA-224", "HEX").unwrap(),
//!     "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
//! );
//!
//! let tag = session
//!     .hmac_encoded("key", InputEncoding::Ascii, Variant::Sha256, OutputFormat::Base64)
//!     .unwrap();
//! assert_eq!(tag.len(), 43);
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls; without it the core crates
//!   are `no_std` and need only `alloc`
//! - `session` (default, implies `std`): [`DigestSession`](session::DigestSession) and the
//!   text codecs it relies on
//! - `utils`: the hex / base64 codecs alone
//! - `serde`: `Serialize` / `Deserialize` for the public enums and config
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`sha2mac-api`]: Error taxonomy and public types
//! - [`sha2mac-algorithms`]: Bit buffers, SHA-224/256 and HMAC
//! - [`sha2mac-session`]: Memoizing sessions with a string-level API
//! - [`sha2mac-utils`]: Text decoding and display encodings

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use sha2mac_algorithms as algorithms;
pub use sha2mac_api as api;
pub use sha2mac_common as common;
pub use sha2mac_params as params;

// Feature-gated re-exports
#[cfg(feature = "session")]
pub use sha2mac_session as session;

#[cfg(feature = "utils")]
pub use sha2mac_utils as utils;

/// Common imports for sha2mac users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export public types
    pub use crate::api::{EncodingConfig, InputEncoding, OutputFormat, Variant};

    // Re-export core primitives
    pub use crate::algorithms::hash::HashFunction;
    pub use crate::algorithms::{hmac, BitBuffer, Digest, Hmac, Sha224, Sha256};

    #[cfg(feature = "session")]
    pub use crate::session::DigestSession;
}
