//! AES-128-GCM with a 16-byte IV
//!
//! GCM accepts IVs of any length. A 96-bit IV is used directly as the counter
//! block; any other length, including the 16 bytes used here, is first
//! compressed with GHASH into the initial counter block (NIST SP 800-38D,
//! section 7.1). The tag is always the full 16 bytes.
//!
//! Decryption authenticates the ciphertext before any keystream is applied,
//! so a failed `open` never exposes plaintext.

use aes::Aes128;
use aes_gcm::aead::consts::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::AeadInPlace;
use aes_gcm::{AesGcm, KeyInit};
use nistecies_params::utils::symmetric::{AES128_KEY_SIZE, GCM_TAG_SIZE, GCM_VARIABLE_IV_SIZE};
use tracing::debug;

use crate::error::{validate, Error, Result};

type Aes128Gcm16 = AesGcm<Aes128, U16>;

/// AES-128-GCM cipher keyed once, used with 16-byte IVs
pub struct Gcm {
    cipher: Aes128Gcm16,
}

impl Gcm {
    /// Algorithm name used in errors and logs
    pub const ALGORITHM: &'static str = "AES-128-GCM";

    /// Create a cipher from a 16-byte key
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;
        let cipher = Aes128Gcm16::new_from_slice(key).map_err(|_| Error::Length {
            context: "AES-128 key",
            expected: AES128_KEY_SIZE,
            actual: key.len(),
        })?;
        Ok(Self { cipher })
    }

    /// Encrypt without associated data, returning `(ciphertext, tag)`
    ///
    /// The ciphertext has the same length as the plaintext.
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8]) -> Result<(Vec<u8>, [u8; GCM_TAG_SIZE])> {
        validate::length("GCM IV", nonce.len(), GCM_VARIABLE_IV_SIZE)?;

        let mut buffer = plaintext.to_vec();
        let tag = self
            .cipher
            .encrypt_in_place_detached(GenericArray::from_slice(nonce), &[], &mut buffer)
            .map_err(|_| Error::Processing {
                operation: Self::ALGORITHM,
                details: "plaintext too long",
            })?;

        let mut out = [0u8; GCM_TAG_SIZE];
        out.copy_from_slice(tag.as_slice());
        Ok((buffer, out))
    }

    /// Verify the tag, then decrypt
    pub fn open(&self, nonce: &[u8], ciphertext: &[u8], tag: &[u8]) -> Result<Vec<u8>> {
        validate::length("GCM IV", nonce.len(), GCM_VARIABLE_IV_SIZE)?;
        validate::length("GCM tag", tag.len(), GCM_TAG_SIZE)?;

        let mut buffer = ciphertext.to_vec();
        let verified = self
            .cipher
            .decrypt_in_place_detached(
                GenericArray::from_slice(nonce),
                &[],
                &mut buffer,
                GenericArray::from_slice(tag),
            )
            .is_ok();
        if !verified {
            debug!(len = ciphertext.len(), "GCM tag mismatch");
        }
        validate::authentication(verified, Self::ALGORITHM)?;
        Ok(buffer)
    }
}
