//! Digest sessions for sha2mac
//!
//! A [`DigestSession`] binds one input message and hands out SHA-224 and
//! SHA-256 digests of it, plus HMACs under caller-supplied keys. Each
//! variant's digest is computed at most once per session.
//!
//! ```
//! use sha2mac_session::{DigestSession, InputEncoding, Variant};
//!
//! let session = DigestSession::new("abc", InputEncoding::Ascii).unwrap();
//! let digest = session.digest(Variant::Sha256).unwrap();
//! assert_eq!(
//!     digest.to_hex(false),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
mod session;

pub use error::{Error, Result};
pub use session::DigestSession;

pub use sha2mac_algorithms::{BitBuffer, Digest};
pub use sha2mac_api::{EncodingConfig, InputEncoding, OutputFormat, Variant};
