//! Security primitives for handling intermediate secret material

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretWords, ZeroizeGuard};
