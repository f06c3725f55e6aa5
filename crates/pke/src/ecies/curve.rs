//! The three supported curves and their fixed sizes

use core::fmt;

use nistecies_algorithms::ec::{p256, p384, p521};
use nistecies_common::SecretVec;
use nistecies_params::traditional::ecdh::{OID_P256, OID_P384, OID_P521};
use nistecies_params::traditional::ecies::{
    P256_PKCS8_DER_SIZE, P256_SEC1_DER_SIZE, P256_SPKI_DER_SIZE, P384_PKCS8_DER_SIZE,
    P384_SEC1_DER_SIZE, P384_SPKI_DER_SIZE, P521_PKCS8_DER_SIZE, P521_SEC1_DER_SIZE,
    P521_SPKI_DER_SIZE,
};
use rand::{CryptoRng, RngCore};

use crate::error::Result;

/// A named NIST prime curve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    P256,
    P384,
    P521,
}

/// DER container shapes accepted by the key extractor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    /// X.509 SubjectPublicKeyInfo
    SubjectPublicKeyInfo,
    /// SEC1 ECPrivateKey with `[0]` parameters and `[1]` public key
    Sec1,
    /// PKCS#8 PrivateKeyInfo wrapping SEC1 without inner parameters
    Pkcs8,
}

impl Curve {
    /// All supported curves, smallest first
    pub const ALL: [Curve; 3] = [Curve::P256, Curve::P384, Curve::P521];

    /// Length of an uncompressed SEC1 point
    pub const fn point_len(self) -> usize {
        match self {
            Curve::P256 => p256::P256_POINT_UNCOMPRESSED_SIZE,
            Curve::P384 => p384::P384_POINT_UNCOMPRESSED_SIZE,
            Curve::P521 => p521::P521_POINT_UNCOMPRESSED_SIZE,
        }
    }

    /// Length of a scalar, and of the ECDH shared secret
    pub const fn scalar_len(self) -> usize {
        match self {
            Curve::P256 => p256::P256_SCALAR_SIZE,
            Curve::P384 => p384::P384_SCALAR_SIZE,
            Curve::P521 => p521::P521_SCALAR_SIZE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Curve::P256 => p256::CURVE_NAME,
            Curve::P384 => p384::CURVE_NAME,
            Curve::P521 => p521::CURVE_NAME,
        }
    }

    /// DER content bytes of the named-curve OID
    pub const fn oid(self) -> &'static [u8] {
        match self {
            Curve::P256 => OID_P256,
            Curve::P384 => OID_P384,
            Curve::P521 => OID_P521,
        }
    }

    /// Exact DER length of the given container shape on this curve
    pub const fn container_len(self, kind: ContainerKind) -> usize {
        match (self, kind) {
            (Curve::P256, ContainerKind::SubjectPublicKeyInfo) => P256_SPKI_DER_SIZE,
            (Curve::P384, ContainerKind::SubjectPublicKeyInfo) => P384_SPKI_DER_SIZE,
            (Curve::P521, ContainerKind::SubjectPublicKeyInfo) => P521_SPKI_DER_SIZE,
            (Curve::P256, ContainerKind::Sec1) => P256_SEC1_DER_SIZE,
            (Curve::P384, ContainerKind::Sec1) => P384_SEC1_DER_SIZE,
            (Curve::P521, ContainerKind::Sec1) => P521_SEC1_DER_SIZE,
            (Curve::P256, ContainerKind::Pkcs8) => P256_PKCS8_DER_SIZE,
            (Curve::P384, ContainerKind::Pkcs8) => P384_PKCS8_DER_SIZE,
            (Curve::P521, ContainerKind::Pkcs8) => P521_PKCS8_DER_SIZE,
        }
    }

    /// Find the curve whose container of `kind` has exactly `len` bytes
    pub fn from_container_len(kind: ContainerKind, len: usize) -> Option<Curve> {
        Self::ALL
            .into_iter()
            .find(|curve| curve.container_len(kind) == len)
    }

    /// Curve whose uncompressed point has exactly `len` bytes
    pub fn from_point_len(len: usize) -> Option<Curve> {
        Self::ALL.into_iter().find(|curve| curve.point_len() == len)
    }

    pub(crate) fn generate_keypair<R: CryptoRng + RngCore>(
        self,
        rng: &mut R,
    ) -> Result<(SecretVec, Vec<u8>)> {
        let pair = match self {
            Curve::P256 => p256::generate_keypair(rng)?,
            Curve::P384 => p384::generate_keypair(rng)?,
            Curve::P521 => p521::generate_keypair(rng)?,
        };
        Ok(pair)
    }

    pub(crate) fn public_key_from_scalar(self, scalar: &[u8]) -> Result<Vec<u8>> {
        let point = match self {
            Curve::P256 => p256::public_key_from_scalar(scalar)?,
            Curve::P384 => p384::public_key_from_scalar(scalar)?,
            Curve::P521 => p521::public_key_from_scalar(scalar)?,
        };
        Ok(point)
    }

    pub(crate) fn validate_point(self, point: &[u8]) -> Result<()> {
        match self {
            Curve::P256 => p256::validate_point(point)?,
            Curve::P384 => p384::validate_point(point)?,
            Curve::P521 => p521::validate_point(point)?,
        }
        Ok(())
    }

    pub(crate) fn ecdh(self, scalar: &[u8], peer_point: &[u8]) -> Result<SecretVec> {
        let z = match self {
            Curve::P256 => p256::ecdh(scalar, peer_point)?,
            Curve::P384 => p384::ecdh(scalar, peer_point)?,
            Curve::P521 => p521::ecdh(scalar, peer_point)?,
        };
        Ok(z)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
