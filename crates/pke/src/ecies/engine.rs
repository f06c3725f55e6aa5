//! ECIES encryption and decryption over raw keys or DER containers

use nistecies_common::EphemeralSecret;
use nistecies_params::utils::symmetric::GCM_TAG_SIZE;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

use super::agreement::{self, SharedSecret};
use super::cipher;
use super::config::AlgorithmSuite;
use super::keys::{extract_private_key, extract_public_key, RawPrivateKey, RawPublicKey};
use super::EciesEnvelope;
use crate::error::{Error, Result};

/// Stateless ECIES engine bound to one algorithm suite
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EciesEngine {
    suite: AlgorithmSuite,
}

impl EciesEngine {
    pub fn new(suite: AlgorithmSuite) -> Self {
        Self { suite }
    }

    pub fn suite(&self) -> &AlgorithmSuite {
        &self.suite
    }

    /// Encrypt `plaintext` to `recipient`
    ///
    /// `shared_info` is mixed into the KDF and must be supplied identically
    /// on decryption; `None` is the interoperable default.
    pub fn encrypt<R: CryptoRng + RngCore>(
        &self,
        plaintext: &[u8],
        recipient: &RawPublicKey,
        shared_info: Option<&[u8]>,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let ephemeral = EphemeralSecret::new(RawPrivateKey::generate(recipient.curve(), rng)?);
        self.encrypt_with_ephemeral(plaintext, recipient, ephemeral, shared_info)
    }

    /// Encryption with a caller-chosen ephemeral key, for known-answer tests
    pub(crate) fn encrypt_with_ephemeral(
        &self,
        plaintext: &[u8],
        recipient: &RawPublicKey,
        ephemeral: EphemeralSecret<RawPrivateKey>,
        shared_info: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let curve = recipient.curve();
        debug!(%curve, suite = %self.suite, plaintext_len = plaintext.len(), "ECIES encrypt");

        let (ephemeral_public, shared) = agree_ephemeral(ephemeral, recipient)?;
        let (ciphertext, tag) = self.seal_with(&shared, plaintext, shared_info)?;
        drop(shared);

        let envelope = EciesEnvelope::assemble(ephemeral_public.as_bytes(), &ciphertext, &tag);
        trace!(envelope_len = envelope.len(), "ECIES envelope assembled");
        Ok(envelope)
    }

    /// Decrypt an envelope addressed to `recipient`
    pub fn decrypt(
        &self,
        envelope: &[u8],
        recipient: &RawPrivateKey,
        shared_info: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let curve = recipient.curve();
        debug!(%curve, suite = %self.suite, envelope_len = envelope.len(), "ECIES decrypt");

        let parts = EciesEnvelope::parse(envelope, curve)?;
        let shared = agreement::agree_with_point(recipient, parts.ephemeral_public_key)?;
        let stream = cipher::derive_key_stream(&self.suite, &shared, shared_info)?;
        drop(shared);

        cipher::open(&stream, parts.ciphertext, parts.tag).map_err(|e| {
            if matches!(e, Error::AuthenticationFailed) {
                debug!(%curve, "ECIES authentication failed");
            }
            e
        })
    }

    /// Extract the recipient key from a DER SubjectPublicKeyInfo, then encrypt
    pub fn encrypt_to_container<R: CryptoRng + RngCore>(
        &self,
        plaintext: &[u8],
        public_container: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let recipient = extract_public_key(public_container)?;
        self.encrypt(plaintext, &recipient, None, rng)
    }

    /// Extract the private key from a DER SEC1 or PKCS#8 container, then decrypt
    pub fn decrypt_with_container(&self, envelope: &[u8], private_container: &[u8]) -> Result<Vec<u8>> {
        let recipient = extract_private_key(private_container)?;
        self.decrypt(envelope, &recipient, None)
    }

    fn seal_with(
        &self,
        shared: &SharedSecret,
        plaintext: &[u8],
        shared_info: Option<&[u8]>,
    ) -> Result<(Vec<u8>, [u8; GCM_TAG_SIZE])> {
        let stream = cipher::derive_key_stream(&self.suite, shared, shared_info)?;
        cipher::seal(&stream, plaintext)
    }
}

/// Run ECDH with the ephemeral key and wipe it
///
/// Only the ephemeral public point and the shared secret leave this
/// function; the scalar is zeroized before key derivation starts.
fn agree_ephemeral(
    ephemeral: EphemeralSecret<RawPrivateKey>,
    recipient: &RawPublicKey,
) -> Result<(RawPublicKey, SharedSecret)> {
    let ephemeral_public = ephemeral.public_key();
    let shared = agreement::agree(&ephemeral, recipient)?;
    drop(ephemeral);
    Ok((ephemeral_public, shared))
}
