//! Test vectors, runners and benchmarks for the sha2mac library
pub mod vectors;

pub use vectors::{run_hash_vectors, run_hmac_vectors, VectorError};
