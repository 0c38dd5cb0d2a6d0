//! Message padding (FIPS 180-4 §5.1.1)
//!
//! A single `1` bit follows the message, then zero bits up to 448 mod 512,
//! then the message length as a 64-bit big-endian integer. The full 64-bit
//! length is written, so messages of 2^32 bits and more hash correctly.

use alloc::vec;

use sha2mac_params::utils::hash::{SHA256_BLOCK_BITS, SHA256_BLOCK_WORDS};

use crate::bits::{words_for_bits, BitBuffer};

/// Padded length in bits for a message of `bit_len` bits
///
/// The smallest multiple of 512 that is at least `bit_len + 65`.
pub fn padded_bit_len(bit_len: u64) -> u64 {
    ((bit_len + 64) / SHA256_BLOCK_BITS + 1) * SHA256_BLOCK_BITS
}

/// Pad `message` to a whole number of 512-bit blocks
pub fn pad(message: &BitBuffer) -> BitBuffer {
    let bit_len = message.bit_len();
    let padded_words = words_for_bits(padded_bit_len(bit_len));
    debug_assert_eq!(padded_words % SHA256_BLOCK_WORDS, 0);

    let mut words = vec![0u32; padded_words];
    words[..message.word_len()].copy_from_slice(message.words());

    words[(bit_len / 32) as usize] |= 0x8000_0000 >> (bit_len % 32);

    write_length_field(&mut words, bit_len);

    BitBuffer::from_aligned_words(words)
}

/// Store `bit_len` big-endian in the last two words of `words`
///
/// `words` holds at least two words.
pub(crate) fn write_length_field(words: &mut [u32], bit_len: u64) {
    let n = words.len();
    words[n - 2] = (bit_len >> 32) as u32;
    words[n - 1] = bit_len as u32;
}
