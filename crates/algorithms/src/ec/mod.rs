//! Elliptic Curve Primitives
//!
//! ECDH building blocks on the NIST prime curves P-256, P-384 and P-521.
//! Each curve module exposes the same small surface: key pair generation,
//! scalar and point validation, public key derivation and the raw ECDH
//! shared secret (the affine x-coordinate, left-padded to the field size).
//!
//! Points are always handled in uncompressed SEC1 form (`0x04 || X || Y`).
//! Arithmetic is provided by the RustCrypto curve crates, which implement it
//! in constant time.

mod nist;

pub mod p256;
pub mod p384;
pub mod p521;
