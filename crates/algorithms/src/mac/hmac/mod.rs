//! HMAC over SHA-224 / SHA-256 (RFC 2104, FIPS 198-1)
//!
//! The key is normalized once to a 512-bit block and only the two derived
//! pads are kept, in zeroizing storage. Each MAC is two digest passes:
//! `H(opad || H(ipad || message))`.

use sha2mac_api::Variant;
use sha2mac_common::security::SecretWords;
use sha2mac_params::utils::mac::{HMAC_IPAD_WORD, HMAC_KEY_BITS, HMAC_KEY_WORDS, HMAC_OPAD_WORD};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bits::BitBuffer;
use crate::error::{validate, Result};
use crate::hash::sha2;
use crate::types::Digest;

type Pad = SecretWords<HMAC_KEY_WORDS>;

/// Keyed HMAC instance for one variant
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hmac {
    #[zeroize(skip)]
    variant: Variant,
    ipad: Pad,
    opad: Pad,
}

impl Hmac {
    /// Key an HMAC instance
    ///
    /// Keys longer than 512 bits are replaced by their digest under
    /// `variant`; shorter keys are zero-extended.
    pub fn new(key: &BitBuffer, variant: Variant) -> Result<Self> {
        let mut k0 = normalize_key(key, variant)?;
        let ipad = k0.xor_with(HMAC_IPAD_WORD);
        let opad = k0.xor_with(HMAC_OPAD_WORD);
        k0.zeroize();

        Ok(Self {
            variant,
            ipad,
            opad,
        })
    }

    /// The variant this instance hashes with
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Compute the tag of `message`
    pub fn mac(&self, message: &BitBuffer) -> Result<Digest> {
        let inner = sha2::digest(&pad_buffer(&self.ipad).concat(message), self.variant)?;
        let outer_input = pad_buffer(&self.opad).concat(&inner.to_bit_buffer());
        sha2::digest(&outer_input, self.variant)
    }

    /// Constant-time check of `tag` against the tag of `message`
    pub fn verify(&self, message: &BitBuffer, tag: &[u8]) -> Result<bool> {
        let expected = self.mac(message)?.to_bytes();
        let size = expected.len();

        // Iterate over the public digest length whatever the tag length.
        let mut diff = 0u8;
        for (i, a) in expected.iter().enumerate() {
            diff |= a ^ tag.get(i).copied().unwrap_or(0);
        }
        diff |= ((tag.len() ^ size) != 0) as u8;

        Ok(diff.ct_eq(&0u8).unwrap_u8() == 1)
    }
}

impl core::fmt::Debug for Hmac {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hmac")
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

/// One-shot HMAC of `message` under `key`
pub fn hmac(key: &BitBuffer, message: &BitBuffer, variant: Variant) -> Result<Digest> {
    Hmac::new(key, variant)?.mac(message)
}

/// Reduce `key` to exactly one 512-bit block
fn normalize_key(key: &BitBuffer, variant: Variant) -> Result<Pad> {
    let hashed;
    let material = if key.bit_len() > HMAC_KEY_BITS {
        hashed = sha2::digest(key, variant)?.to_bit_buffer();
        &hashed
    } else {
        key
    };

    let words = material.words();
    validate::max_length("HMAC key words", words.len(), HMAC_KEY_WORDS)?;

    let mut k0 = Pad::zeroed();
    k0.as_mut_words()[..words.len()].copy_from_slice(words);
    Ok(k0)
}

fn pad_buffer(pad: &Pad) -> BitBuffer {
    BitBuffer::from_aligned_words(pad.as_words().to_vec())
}
