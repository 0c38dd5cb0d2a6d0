//! Constant values for sha2mac hash and MAC operations

pub mod hash;
pub mod mac;
