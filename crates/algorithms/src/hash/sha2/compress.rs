//! SHA-256 block compression and message-schedule expansion (FIPS 180-4 §6.2)

use crate::error::{validate, Result};

use sha2mac_common::security::{EphemeralSecret, ZeroizeGuard};
use sha2mac_params::utils::hash::{
    SHA256_BLOCK_WORDS, SHA256_ROUNDS, SHA256_ROUND_CONSTANTS, SHA256_STATE_WORDS,
};

use super::HashState;

/// Rotate right; amounts of 32 or more leave `x` unchanged
#[inline(always)]
pub fn rotr(x: u32, n: u32) -> u32 {
    if n < 32 {
        x.rotate_right(n)
    } else {
        x
    }
}

/// Shift right; amounts of 32 or more yield zero
#[inline(always)]
pub fn shr(x: u32, n: u32) -> u32 {
    x.checked_shr(n).unwrap_or(0)
}

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0
#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// Σ1
#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// σ0
#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ shr(x, 3)
}

/// σ1
#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ shr(x, 10)
}

/// Run the compression function over every 16-word block in `blocks`
///
/// `blocks` must be non-empty and a whole number of 512-bit blocks, which is
/// what the padder produces.
pub fn compress(initial: HashState, blocks: &[u32]) -> Result<HashState> {
    validate::parameter(
        !blocks.is_empty(),
        "blocks",
        "at least one 512-bit block is required",
    )?;
    validate::multiple_of("SHA-256 message blocks", blocks.len(), SHA256_BLOCK_WORDS)?;

    let mut state = initial;
    for block in blocks.chunks_exact(SHA256_BLOCK_WORDS) {
        compress_block(&mut state.0, block);
    }
    Ok(state)
}

fn compress_block(state: &mut [u32; SHA256_STATE_WORDS], block: &[u32]) {
    // Message schedule is wiped when it goes out of scope
    let mut w = EphemeralSecret::new([0u32; SHA256_ROUNDS]);

    w[..SHA256_BLOCK_WORDS].copy_from_slice(block);
    for t in SHA256_BLOCK_WORDS..SHA256_ROUNDS {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let mut working_vars = *state;
    let mut guard = ZeroizeGuard::new(&mut working_vars);

    let mut a = guard[0];
    let mut b = guard[1];
    let mut c = guard[2];
    let mut d = guard[3];
    let mut e = guard[4];
    let mut f = guard[5];
    let mut g = guard[6];
    let mut h = guard[7];

    for t in 0..SHA256_ROUNDS {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(SHA256_ROUND_CONSTANTS[t])
            .wrapping_add(w[t]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    *guard = [a, b, c, d, e, f, g, h];
    for (word, var) in state.iter_mut().zip(guard.iter()) {
        *word = word.wrapping_add(*var);
    }
}
