//! Key stream derivation and AES-128-GCM sealing for the envelope

use nistecies_algorithms::kdf::X963Sha384;
use nistecies_algorithms::Gcm;
use nistecies_common::SecretBuffer;
use nistecies_params::traditional::ecies::ECIES_DERIVED_STREAM_SIZE;
use nistecies_params::utils::symmetric::{AES128_KEY_SIZE, GCM_TAG_SIZE};

use super::agreement::SharedSecret;
use super::config::{AlgorithmSuite, KdfHash, KdfScheme};
use crate::error::Result;

/// 32-byte KDF output: AES-128 key followed by the 16-byte GCM IV
#[derive(Debug)]
pub struct DerivedKeyStream(SecretBuffer<ECIES_DERIVED_STREAM_SIZE>);

impl DerivedKeyStream {
    pub fn key(&self) -> &[u8] {
        &self.0.as_slice()[..AES128_KEY_SIZE]
    }

    pub fn iv(&self) -> &[u8] {
        &self.0.as_slice()[AES128_KEY_SIZE..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

/// Run the suite's KDF over the shared secret
pub fn derive_key_stream(
    suite: &AlgorithmSuite,
    shared: &SharedSecret,
    shared_info: Option<&[u8]>,
) -> Result<DerivedKeyStream> {
    let stream = match (suite.kdf_scheme, suite.kdf_hash) {
        (KdfScheme::X963, KdfHash::Sha384) => {
            X963Sha384::derive_array::<ECIES_DERIVED_STREAM_SIZE>(shared.as_bytes(), shared_info)?
        }
    };
    Ok(DerivedKeyStream(stream))
}

/// Encrypt, returning the ciphertext and the detached tag
pub fn seal(stream: &DerivedKeyStream, plaintext: &[u8]) -> Result<(Vec<u8>, [u8; GCM_TAG_SIZE])> {
    let gcm = Gcm::new(stream.key())?;
    Ok(gcm.seal(stream.iv(), plaintext)?)
}

/// Verify the tag and decrypt
///
/// Fails with `AuthenticationFailed` without producing any plaintext.
pub fn open(stream: &DerivedKeyStream, ciphertext: &[u8], tag: &[u8]) -> Result<Vec<u8>> {
    let gcm = Gcm::new(stream.key())?;
    Ok(gcm.open(stream.iv(), ciphertext, tag)?)
}
