//! Elliptic Curve Integrated Encryption Scheme (ECIES) over the NIST prime curves.
//!
//! Encryption generates a fresh ephemeral key pair on the recipient's curve,
//! runs ECDH against the recipient's public point, stretches the shared
//! x-coordinate with X9.63 KDF (SHA-384) into 32 bytes and uses them as an
//! AES-128 key and a 16-byte GCM IV. The envelope is
//!
//! ```text
//! ephemeral public key (65 | 97 | 133) || ciphertext (len(m)) || tag (16)
//! ```
//!
//! with no length prefixes; the curve is implied by the recipient key.

use nistecies_params::utils::symmetric::GCM_TAG_SIZE;

use crate::error::{Error, Result};

pub mod agreement;
pub mod cipher;
pub mod config;
pub mod curve;
mod der;
pub mod engine;
pub mod keys;

pub mod p256;
pub mod p384;
pub mod p521;

pub use config::AlgorithmSuite;
pub use curve::{ContainerKind, Curve};
pub use engine::EciesEngine;
pub use keys::{extract_private_key, extract_public_key, RawPrivateKey, RawPublicKey};

pub use p256::{EciesP256, EciesP256PublicKey, EciesP256SecretKey};
pub use p384::{EciesP384, EciesP384PublicKey, EciesP384SecretKey};
pub use p521::{EciesP521, EciesP521PublicKey, EciesP521SecretKey};

/// Borrowed view of the three envelope regions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EciesEnvelope<'a> {
    pub ephemeral_public_key: &'a [u8],
    pub ciphertext: &'a [u8],
    pub tag: &'a [u8],
}

impl<'a> EciesEnvelope<'a> {
    /// Smallest valid envelope for the curve: point and tag, empty ciphertext
    pub const fn minimum_len(curve: Curve) -> usize {
        curve.point_len() + GCM_TAG_SIZE
    }

    /// Envelope length for a plaintext of `plaintext_len` bytes
    pub const fn len_for(curve: Curve, plaintext_len: usize) -> usize {
        Self::minimum_len(curve) + plaintext_len
    }

    /// Concatenate the regions in wire order
    pub fn assemble(ephemeral_public_key: &[u8], ciphertext: &[u8], tag: &[u8]) -> Vec<u8> {
        let mut out =
            Vec::with_capacity(ephemeral_public_key.len() + ciphertext.len() + tag.len());
        out.extend_from_slice(ephemeral_public_key);
        out.extend_from_slice(ciphertext);
        out.extend_from_slice(tag);
        out
    }

    /// Split an envelope for a key on `curve`
    ///
    /// The ciphertext region may be empty. Point validity is not checked
    /// here.
    pub fn parse(bytes: &'a [u8], curve: Curve) -> Result<Self> {
        let minimum = Self::minimum_len(curve);
        if bytes.len() < minimum {
            return Err(Error::EnvelopeTooShort {
                minimum,
                actual: bytes.len(),
            });
        }

        let (ephemeral_public_key, rest) = bytes.split_at(curve.point_len());
        let (ciphertext, tag) = rest.split_at(rest.len() - GCM_TAG_SIZE);
        Ok(Self {
            ephemeral_public_key,
            ciphertext,
            tag,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        Self::assemble(self.ephemeral_public_key, self.ciphertext, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_lengths() {
        assert_eq!(EciesEnvelope::minimum_len(Curve::P256), 81);
        assert_eq!(EciesEnvelope::minimum_len(Curve::P384), 113);
        assert_eq!(EciesEnvelope::minimum_len(Curve::P521), 149);
        assert_eq!(EciesEnvelope::len_for(Curve::P256, 23), 104);
    }

    #[test]
    fn test_parse_splits_regions() {
        let point = [0x04u8; 65];
        let ct = [0xccu8; 7];
        let tag = [0x77u8; 16];
        let bytes = EciesEnvelope::assemble(&point, &ct, &tag);
        assert_eq!(bytes.len(), 65 + 7 + 16);

        let env = EciesEnvelope::parse(&bytes, Curve::P256).unwrap();
        assert_eq!(env.ephemeral_public_key, &point);
        assert_eq!(env.ciphertext, &ct);
        assert_eq!(env.tag, &tag);
        assert_eq!(env.to_bytes(), bytes);
    }

    #[test]
    fn test_parse_empty_ciphertext() {
        let bytes = vec![0u8; 97 + 16];
        let env = EciesEnvelope::parse(&bytes, Curve::P384).unwrap();
        assert!(env.ciphertext.is_empty());
        assert_eq!(env.tag.len(), 16);
    }

    #[test]
    fn test_parse_too_short() {
        let bytes = vec![0u8; 148];
        assert!(matches!(
            EciesEnvelope::parse(&bytes, Curve::P521),
            Err(Error::EnvelopeTooShort {
                minimum: 149,
                actual: 148
            })
        ));
        assert!(EciesEnvelope::parse(&[], Curve::P256).is_err());
    }
}
