//! Secret data types with guaranteed zeroization
//!
//! This module provides type-safe wrappers for sensitive data that ensure
//! proper cleanup and zeroization when the data is no longer needed.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size block of secret 32-bit words that is zeroized on drop
///
/// Used for normalized HMAC keys and the pads derived from them.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretWords<const N: usize> {
    words: [u32; N],
}

impl<const N: usize> SecretWords<N> {
    /// Create a new secret block with the given words
    pub fn new(words: [u32; N]) -> Self {
        Self { words }
    }

    /// Create a zeroed secret block
    pub fn zeroed() -> Self {
        Self { words: [0u32; N] }
    }

    /// Number of words
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the block is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get a reference to the inner words
    pub fn as_words(&self) -> &[u32] {
        &self.words
    }

    /// Get a mutable reference to the inner words
    pub fn as_mut_words(&mut self) -> &mut [u32] {
        &mut self.words
    }

    /// XOR every word with `mask`, producing a new block
    pub fn xor_with(&self, mask: u32) -> Self {
        let mut out = Self::zeroed();
        for (dst, src) in out.words.iter_mut().zip(self.words.iter()) {
            *dst = src ^ mask;
        }
        out
    }
}

impl<const N: usize> AsRef<[u32]> for SecretWords<N> {
    fn as_ref(&self) -> &[u32] {
        &self.words
    }
}

impl<const N: usize> fmt::Debug for SecretWords<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretWords<{}>([REDACTED])", N)
    }
}

/// Ephemeral secret that is automatically zeroized after use
///
/// This type wraps any type T and ensures it is zeroized when dropped.
/// It's useful for temporary secrets and intermediate cryptographic values.
pub struct EphemeralSecret<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> EphemeralSecret<T> {
    /// Create a new ephemeral secret
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }
}

impl<T: Zeroize> Drop for EphemeralSecret<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize + Clone> Clone for EphemeralSecret<T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T: Zeroize + Default> Default for EphemeralSecret<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Zeroize> Deref for EphemeralSecret<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Zeroize> DerefMut for EphemeralSecret<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T: Zeroize> fmt::Debug for EphemeralSecret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EphemeralSecret([REDACTED])")
    }
}

/// Guard type that ensures a value is zeroized when dropped
///
/// This is useful for ensuring cleanup happens even in the presence
/// of early returns or panics.
pub struct ZeroizeGuard<'a, T: Zeroize> {
    value: &'a mut T,
}

impl<'a, T: Zeroize> ZeroizeGuard<'a, T> {
    /// Create a new zeroize guard for the given value
    pub fn new(value: &'a mut T) -> Self {
        Self { value }
    }
}

impl<T: Zeroize> Drop for ZeroizeGuard<'_, T> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl<T: Zeroize> Deref for ZeroizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl<T: Zeroize> DerefMut for ZeroizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value
    }
}
