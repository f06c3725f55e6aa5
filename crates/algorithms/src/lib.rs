//! Cryptographic primitives for the nistecies library
//!
//! This crate wraps the building blocks of the ECIES suite behind small,
//! byte-oriented APIs:
//!
//! - [`ec`]: ECDH on NIST P-256, P-384 and P-521
//! - [`kdf`]: the ANSI X9.63 key derivation function
//! - [`aead`]: AES-128-GCM with a 16-byte IV
//!
//! Secret outputs are returned in zeroizing containers from
//! `nistecies-common`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// AEAD cipher implementations
pub mod aead;
pub use aead::Gcm;

// KDF implementations
pub mod kdf;
pub use kdf::{X963Kdf, X963Sha384};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{p256, p384, p521};

// Re-export security types from nistecies-common
pub use nistecies_common::security::{EphemeralSecret, SecretBuffer, SecretVec, ZeroizeGuard};
