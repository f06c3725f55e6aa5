//! Public Key Encryption (PKE) schemes for the nistecies library.
//!
//! The single scheme provided is ECIES over NIST P-256, P-384 and P-521 with
//! ANSI X9.63 SHA-384 key derivation and AES-128-GCM using a derived 16-byte
//! IV. See [`ecies`] for the envelope format and the key containers accepted.

pub mod ecies;
pub mod error;

// Re-export key items
pub use ecies::{
    AlgorithmSuite, Curve, EciesEngine, EciesEnvelope, EciesP256, EciesP384, EciesP521,
    RawPrivateKey, RawPublicKey,
};
pub use error::{Error, Result};
