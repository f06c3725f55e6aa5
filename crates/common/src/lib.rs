//! Common implementations and shared functionality for the nistecies library
//!
//! This crate provides the zeroizing containers that every layer of the
//! workspace uses to hold scalars, shared secrets and derived keys.

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, SecretVec, ZeroizeGuard};
