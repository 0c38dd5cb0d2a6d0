//! Typed outputs of the hash engines

pub mod digest;

pub use digest::Digest;

pub use sha2mac_common::security::{EphemeralSecret, SecretWords, ZeroizeGuard};
