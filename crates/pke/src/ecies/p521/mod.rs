//! ECIES over NIST P-521.
//!
//! A thin typed layer over [`EciesEngine`]: keys are pinned to P-521 at
//! construction and errors surface as [`nistecies_api::Error`].

use nistecies_api::error::{Error as ApiError, Result as ApiResult, ResultExt};
use nistecies_api::traits::Pke;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{extract_private_key, extract_public_key, Curve, EciesEngine, RawPrivateKey, RawPublicKey};
use crate::error::{Error, Result};

const CURVE: Curve = Curve::P521;

fn expect_curve(actual: Curve) -> Result<()> {
    if actual != CURVE {
        return Err(Error::CurveMismatch {
            expected: CURVE,
            actual,
        });
    }
    Ok(())
}

/// Public key for ECIES P-521. Stores the uncompressed point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EciesP521PublicKey(RawPublicKey);

impl EciesP521PublicKey {
    /// Wrap an uncompressed point
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::try_from(RawPublicKey::from_bytes(bytes)?)
    }

    /// Extract from a DER SubjectPublicKeyInfo
    pub fn from_der(container: &[u8]) -> Result<Self> {
        Self::try_from(extract_public_key(container)?)
    }

    pub fn as_raw(&self) -> &RawPublicKey {
        &self.0
    }
}

impl TryFrom<RawPublicKey> for EciesP521PublicKey {
    type Error = Error;

    fn try_from(key: RawPublicKey) -> Result<Self> {
        expect_curve(key.curve())?;
        Ok(Self(key))
    }
}

impl AsRef<[u8]> for EciesP521PublicKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Secret key for ECIES P-521. Stores `public || scalar`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EciesP521SecretKey(RawPrivateKey);

impl EciesP521SecretKey {
    /// Build from a bare big-endian scalar
    pub fn from_scalar(scalar: &[u8]) -> Result<Self> {
        RawPrivateKey::from_scalar(CURVE, scalar).map(Self)
    }

    /// Extract from a DER SEC1 or PKCS#8 container
    pub fn from_der(container: &[u8]) -> Result<Self> {
        Self::try_from(extract_private_key(container)?)
    }

    pub fn public_key(&self) -> EciesP521PublicKey {
        EciesP521PublicKey(self.0.public_key())
    }

    pub fn as_raw(&self) -> &RawPrivateKey {
        &self.0
    }
}

impl TryFrom<RawPrivateKey> for EciesP521SecretKey {
    type Error = Error;

    fn try_from(key: RawPrivateKey) -> Result<Self> {
        expect_curve(key.curve())?;
        Ok(Self(key))
    }
}

impl AsRef<[u8]> for EciesP521SecretKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl core::fmt::Debug for EciesP521SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("EciesP521SecretKey([REDACTED])")
    }
}

/// ECIES over P-521 with the default suite
pub struct EciesP521;

impl Pke for EciesP521 {
    type PublicKey = EciesP521PublicKey;
    type SecretKey = EciesP521SecretKey;
    type Ciphertext = Vec<u8>;

    fn name() -> &'static str {
        "ECIES-P521-X963-SHA384-AES128GCM"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let secret = RawPrivateKey::generate(CURVE, rng).with_context(Self::name())?;
        Ok((EciesP521PublicKey(secret.public_key()), EciesP521SecretKey(secret)))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        shared_info: Option<&[u8]>,
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        EciesEngine::default()
            .encrypt(plaintext, &pk_recipient.0, shared_info, rng)
            .with_context(Self::name())
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
        shared_info: Option<&[u8]>,
    ) -> ApiResult<Vec<u8>> {
        EciesEngine::default()
            .decrypt(ciphertext, &sk_recipient.0, shared_info)
            .map_err(|e| match e {
                // The recipient key is already validated, so a bad point is the envelope's
                Error::InvalidPeerKey(reason) => ApiError::InvalidCiphertext {
                    context: "ECIES envelope",
                    message: reason.to_string(),
                },
                other => other.into(),
            })
    }
}
