//! Hash function implementations

use sha2mac_api::Variant;

use crate::bits::BitBuffer;
use crate::error::Result;
use crate::types::Digest;

pub mod sha2;

pub use sha2::{Sha224, Sha256};

/// One-shot hashing for a fixed variant
pub trait HashFunction {
    /// The variant this type computes
    const VARIANT: Variant;

    /// Hash a byte string
    fn digest(data: &[u8]) -> Result<Digest> {
        sha2::digest(&BitBuffer::from_bytes(data), Self::VARIANT)
    }

    /// Hash an exact bit sequence
    fn digest_bits(message: &BitBuffer) -> Result<Digest> {
        sha2::digest(message, Self::VARIANT)
    }

    /// Digest size in bytes
    fn output_size() -> usize {
        Self::VARIANT.output_size()
    }

    /// Algorithm name, e.g. "SHA-256"
    fn name() -> &'static str {
        Self::VARIANT.name()
    }
}
