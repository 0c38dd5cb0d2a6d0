//! SHA-224 and SHA-256 (FIPS PUB 180-4)
//!
//! Both variants share the padder and the compression function. They differ
//! only in the initial hash value and in SHA-224 dropping the eighth state
//! word from its output.

use sha2mac_api::Variant;
use sha2mac_params::utils::hash::{
    SHA224_INITIAL_STATE, SHA256_INITIAL_STATE, SHA256_STATE_WORDS,
};
use zeroize::Zeroize;

use crate::bits::BitBuffer;
use crate::error::Result;
use crate::hash::HashFunction;
use crate::types::Digest;

pub mod compress;
pub mod padding;

pub use compress::{compress, rotr, shr};
pub use padding::{pad, padded_bit_len};

/// Eight-word running hash value H0..H7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct HashState([u32; SHA256_STATE_WORDS]);

impl HashState {
    /// The initial hash value of `variant`
    pub fn initial(variant: Variant) -> Self {
        match variant {
            Variant::Sha224 => Self(SHA224_INITIAL_STATE),
            Variant::Sha256 => Self(SHA256_INITIAL_STATE),
        }
    }

    /// Wrap explicit state words
    pub fn from_words(words: [u32; SHA256_STATE_WORDS]) -> Self {
        Self(words)
    }

    /// The state words
    pub fn words(&self) -> &[u32; SHA256_STATE_WORDS] {
        &self.0
    }
}

/// Hash `message` with `variant`
pub fn digest(message: &BitBuffer, variant: Variant) -> Result<Digest> {
    let padded = pad(message);
    let mut state = compress(HashState::initial(variant), padded.words())?;
    let out = Digest::from_state(&state, variant);
    state.zeroize();
    Ok(out)
}

/// Marker type for SHA-224
pub enum Sha224 {}

impl HashFunction for Sha224 {
    const VARIANT: Variant = Variant::Sha224;
}

/// Marker type for SHA-256
pub enum Sha256 {}

impl HashFunction for Sha256 {
    const VARIANT: Variant = Variant::Sha256;
}
