//! Common implementations and shared functionality for sha2mac
//!
//! This crate provides the zeroizing containers used by the hash and MAC
//! engines for intermediate values (message schedules, working variables,
//! HMAC pads).

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretWords, ZeroizeGuard};
