//! # nistecies
//!
//! ECIES over the NIST prime curves P-256, P-384 and P-521.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! nistecies = "0.3"
//! ```
//!
//! ```
//! use nistecies::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let recipient = RawPrivateKey::generate(Curve::P256, &mut OsRng).unwrap();
//! let engine = EciesEngine::default();
//!
//! let envelope = engine
//!     .encrypt(b"hello", &recipient.public_key(), None, &mut OsRng)
//!     .unwrap();
//! assert_eq!(envelope.len(), 65 + 5 + 16);
//! assert_eq!(engine.decrypt(&envelope, &recipient, None).unwrap(), b"hello");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`pke::AlgorithmSuite`]
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`nistecies-api`]: Public traits and the top-level error type
//! - [`nistecies-common`]: Zeroizing secret containers
//! - [`nistecies-params`]: Sizes, OIDs and the suite name
//! - [`nistecies-algorithms`]: ECDH, X9.63 KDF and AES-128-GCM
//! - [`nistecies-pke`]: Key extraction, the ECIES engine and typed schemes

pub use nistecies_algorithms as algorithms;
pub use nistecies_api as api;
pub use nistecies_common as common;
pub use nistecies_params as params;
pub use nistecies_pke as pke;

/// Common imports for nistecies users
pub mod prelude {
    pub use crate::api::{Error, Pke, Result};

    pub use crate::pke::ecies::{extract_private_key, extract_public_key};
    pub use crate::pke::{
        AlgorithmSuite, Curve, EciesEngine, EciesP256, EciesP384, EciesP521, RawPrivateKey,
        RawPublicKey,
    };

    pub use crate::common::{EphemeralSecret, SecretBuffer, SecretVec, ZeroizeGuard};
}
