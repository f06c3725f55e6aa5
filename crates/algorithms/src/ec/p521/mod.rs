//! NIST P-521 ECDH primitives
//!
//! The field prime is 2^521 - 1, so scalars and x-coordinates occupy 66
//! bytes with the top seven bits of the first byte always clear.

use nistecies_common::SecretVec;
use nistecies_params::traditional::ecdh::{
    ECDH_P521_PRIVATE_KEY_SIZE, ECDH_P521_PUBLIC_KEY_SIZE, ECDH_P521_SHARED_SECRET_SIZE,
};
use rand::{CryptoRng, RngCore};

use super::nist::{self, CurveSizes};
use crate::error::Result;

/// Size of a P-521 scalar in bytes
pub const P521_SCALAR_SIZE: usize = ECDH_P521_PRIVATE_KEY_SIZE;

/// Size of an uncompressed P-521 point in bytes: 0x04 || x || y
pub const P521_POINT_UNCOMPRESSED_SIZE: usize = ECDH_P521_PUBLIC_KEY_SIZE;

/// Size of the raw ECDH output (x-coordinate) in bytes
pub const P521_SHARED_SECRET_SIZE: usize = ECDH_P521_SHARED_SECRET_SIZE;

/// Display name of the curve
pub const CURVE_NAME: &str = "P-521";

const SIZES: CurveSizes = CurveSizes {
    name: CURVE_NAME,
    scalar: P521_SCALAR_SIZE,
    point: P521_POINT_UNCOMPRESSED_SIZE,
};

/// Generate a key pair with a scalar uniform in [1, n-1]
///
/// Returns `(scalar, uncompressed_point)`.
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(SecretVec, Vec<u8>)> {
    nist::generate_keypair::<::p521::NistP521, R>(&SIZES, rng)
}

/// Compute the uncompressed public point scalar * G
pub fn public_key_from_scalar(scalar: &[u8]) -> Result<Vec<u8>> {
    nist::public_key_from_scalar::<::p521::NistP521>(&SIZES, scalar)
}

/// Check that a big-endian scalar is in [1, n-1]
pub fn validate_scalar(scalar: &[u8]) -> Result<()> {
    nist::validate_scalar::<::p521::NistP521>(&SIZES, scalar)
}

/// Check that bytes encode an uncompressed point on the curve other than the identity
pub fn validate_point(point: &[u8]) -> Result<()> {
    nist::validate_point::<::p521::NistP521>(&SIZES, point)
}

/// ECDH: x-coordinate of scalar * peer_point, exactly P521_SHARED_SECRET_SIZE bytes
pub fn ecdh(scalar: &[u8], peer_point: &[u8]) -> Result<SecretVec> {
    nist::ecdh::<::p521::NistP521>(&SIZES, scalar, peer_point)
}
