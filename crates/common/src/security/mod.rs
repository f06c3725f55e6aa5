//! Security primitives for handling sensitive cryptographic material

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer, SecretVec, ZeroizeGuard};
