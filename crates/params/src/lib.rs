//! Constant values for sha2mac
//!
//! Sizes, initial hash values, round constants and HMAC pad words shared by
//! every other crate in the workspace.

#![no_std]

pub mod utils;
