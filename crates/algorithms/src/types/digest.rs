//! Digest values
//!
//! A `Digest` holds the 7 (SHA-224) or 8 (SHA-256) output words of a hash
//! computation together with the variant that produced it.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use sha2mac_api::Variant;
use sha2mac_params::utils::hash::SHA256_STATE_WORDS;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::bits::BitBuffer;
use crate::error::{validate, Result};
use crate::hash::sha2::HashState;

/// Output of SHA-224 or SHA-256
#[derive(Clone, Zeroize)]
pub struct Digest {
    words: [u32; SHA256_STATE_WORDS],
    len: usize,
    #[zeroize(skip)]
    variant: Variant,
}

impl Digest {
    /// Truncate a final hash state to the output of `variant`
    pub(crate) fn from_state(state: &HashState, variant: Variant) -> Self {
        Self {
            words: *state.words(),
            len: variant.output_words(),
            variant,
        }
    }

    /// Build a digest from its output words
    ///
    /// `words` must hold exactly `variant.output_words()` entries.
    pub fn from_words(words: &[u32], variant: Variant) -> Result<Self> {
        validate::length("Digest::from_words", words.len(), variant.output_words())?;
        let mut buf = [0u32; SHA256_STATE_WORDS];
        buf[..words.len()].copy_from_slice(words);
        Ok(Self {
            words: buf,
            len: words.len(),
            variant,
        })
    }

    /// Output words, 7 for SHA-224 and 8 for SHA-256
    pub fn words(&self) -> &[u32] {
        &self.words[..self.len]
    }

    /// Number of output words
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for digests produced by this crate
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The variant that produced this digest
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.len * 4
    }

    /// Size in bits, 224 or 256
    pub fn bit_len(&self) -> u64 {
        self.len as u64 * 32
    }

    /// Big-endian byte serialization
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.size()];
        BigEndian::write_u32_into(self.words(), &mut out);
        out
    }

    /// Hex rendering, two characters per byte
    pub fn to_hex(&self, uppercase: bool) -> String {
        let bytes = self.to_bytes();
        if uppercase {
            hex::encode_upper(bytes)
        } else {
            hex::encode(bytes)
        }
    }

    /// The digest as a bit sequence, e.g. as input to the outer HMAC hash
    pub fn to_bit_buffer(&self) -> BitBuffer {
        BitBuffer::from_aligned_words(self.words().to_vec())
    }

    /// Constant-time comparison
    ///
    /// Digests of different variants never match.
    pub fn ct_eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        bool::from(self.words().ct_eq(other.words()))
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant && self.ct_eq(other)
    }
}

impl Eq for Digest {}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({})", self.variant, self.to_hex(false))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex(false))
    }
}
