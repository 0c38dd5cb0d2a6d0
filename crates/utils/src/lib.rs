//! Utilities and helpers for sha2mac
//!
//! Conversions at the edge of the library: textual input (ASCII or hex) into
//! raw bytes, and digest bytes into display strings (hex or base64).

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod decode;
pub mod encode;

pub use decode::{decode, decode_ascii, decode_hex};
pub use encode::{encode, encode_base64, encode_hex};
