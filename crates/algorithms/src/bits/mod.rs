//! Bit sequences packed into big-endian 32-bit words
//!
//! `BitBuffer` is the unit the SHA-256 engine consumes. Bit `i` of the
//! sequence lives in word `i / 32` at bit position `31 - i % 32`, so the
//! first bit of the message is the most significant bit of the first word.
//!
//! Invariants upheld by every constructor:
//! - the buffer holds exactly `ceil(bit_len / 32)` words;
//! - every bit past `bit_len` in the last word is zero.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};

/// Immutable sequence of bits backed by 32-bit words
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BitBuffer {
    words: Vec<u32>,
    bit_len: u64,
}

/// Number of words needed to hold `bit_len` bits
#[inline]
pub(crate) fn words_for_bits(bit_len: u64) -> usize {
    bit_len.div_ceil(32) as usize
}

/// Mask selecting the `bits` most significant bits of a word
#[inline]
fn leading_mask(bits: u32) -> u32 {
    match bits {
        0 => 0,
        n if n >= 32 => u32::MAX,
        n => u32::MAX << (32 - n),
    }
}

impl BitBuffer {
    /// The empty sequence
    pub fn empty() -> Self {
        Self {
            words: Vec::new(),
            bit_len: 0,
        }
    }

    /// Pack bytes, most significant byte first within each word
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut words = vec![0u32; bytes.len().div_ceil(4)];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks(4)) {
            let mut buf = [0u8; 4];
            buf[..chunk.len()].copy_from_slice(chunk);
            *word = BigEndian::read_u32(&buf);
        }
        Self {
            words,
            bit_len: bytes.len() as u64 * 8,
        }
    }

    /// Build a buffer from words and an exact bit length
    ///
    /// Fails when `bit_len` exceeds the bits the words provide. Whole words
    /// past `bit_len` are dropped and stray bits in the last word are cleared.
    pub fn from_words(words: &[u32], bit_len: u64) -> Result<Self> {
        validate::bit_length("BitBuffer::from_words", bit_len, words.len() as u64 * 32)?;

        let mut words = words[..words_for_bits(bit_len)].to_vec();
        if let Some(last) = words.last_mut() {
            let used = ((bit_len - 1) % 32 + 1) as u32;
            *last &= leading_mask(used);
        }
        Ok(Self { words, bit_len })
    }

    /// Build a buffer whose length is exactly `words.len() * 32` bits
    pub(crate) fn from_aligned_words(words: Vec<u32>) -> Self {
        let bit_len = words.len() as u64 * 32;
        Self { words, bit_len }
    }

    /// The packed words
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Exact number of bits in the sequence
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Number of words backing the sequence
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Number of bytes needed to hold the sequence
    pub fn byte_len(&self) -> usize {
        self.bit_len.div_ceil(8) as usize
    }

    /// True for the empty sequence
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// True when the sequence is a whole number of bytes
    pub fn is_byte_aligned(&self) -> bool {
        self.bit_len % 8 == 0
    }

    /// Unpack into bytes
    ///
    /// A trailing partial byte is emitted with its unused low bits zero.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.words.len() * 4];
        BigEndian::write_u32_into(&self.words, &mut out);
        out.truncate(self.byte_len());
        out
    }

    /// The sequence `self || other` as a new buffer
    pub fn concat(&self, other: &BitBuffer) -> BitBuffer {
        let bit_len = self.bit_len + other.bit_len;
        let offset = (self.bit_len % 32) as u32;

        let mut words = Vec::with_capacity(words_for_bits(bit_len));
        words.extend_from_slice(&self.words);

        if offset == 0 {
            words.extend_from_slice(&other.words);
        } else {
            for &word in &other.words {
                if let Some(last) = words.last_mut() {
                    *last |= word >> offset;
                }
                words.push(word << (32 - offset));
            }
            words.truncate(words_for_bits(bit_len));
        }

        BitBuffer { words, bit_len }
    }

    /// The sequence followed by zero bits up to `bit_len` bits
    ///
    /// Fails when `bit_len` is shorter than the current length.
    pub fn zero_extend(&self, bit_len: u64) -> Result<BitBuffer> {
        validate::parameter(
            bit_len >= self.bit_len,
            "bit_len",
            "zero extension cannot shorten a buffer",
        )?;
        let mut words = self.words.clone();
        words.resize(words_for_bits(bit_len), 0);
        Ok(BitBuffer { words, bit_len })
    }
}

impl Default for BitBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&[u8]> for BitBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitBuffer")
            .field("bit_len", &self.bit_len)
            .field("words", &self.words.len())
            .finish()
    }
}
