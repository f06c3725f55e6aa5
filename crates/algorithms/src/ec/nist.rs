//! Curve-generic ECDH helpers shared by the per-curve modules

use elliptic_curve::{
    ecdh::diffie_hellman,
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
    AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey, SecretKey,
};
use nistecies_common::SecretVec;
use nistecies_params::traditional::ecdh::SEC1_UNCOMPRESSED_TAG;
use rand::{CryptoRng, RngCore};
use tracing::trace;

use crate::error::{validate, Error, Result};

/// Size parameters of a curve as seen by callers
#[derive(Clone, Copy, Debug)]
pub(crate) struct CurveSizes {
    pub name: &'static str,
    pub scalar: usize,
    pub point: usize,
}

pub(crate) fn generate_keypair<C, R>(
    sizes: &CurveSizes,
    rng: &mut R,
) -> Result<(SecretVec, Vec<u8>)>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
    R: CryptoRng + RngCore,
{
    // Rejection sampling into [1, n-1] happens inside SecretKey::random
    let secret = SecretKey::<C>::random(rng);
    let scalar = SecretVec::from_slice(&secret.to_bytes());
    let point = encode_point(&secret.public_key());

    validate::length(sizes.name, scalar.len(), sizes.scalar)?;
    validate::length(sizes.name, point.len(), sizes.point)?;
    Ok((scalar, point))
}

pub(crate) fn public_key_from_scalar<C>(sizes: &CurveSizes, scalar: &[u8]) -> Result<Vec<u8>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = parse_scalar::<C>(sizes, scalar)?;
    Ok(encode_point(&secret.public_key()))
}

pub(crate) fn validate_scalar<C>(sizes: &CurveSizes, scalar: &[u8]) -> Result<()>
where
    C: CurveArithmetic,
{
    parse_scalar::<C>(sizes, scalar).map(|_| ())
}

pub(crate) fn validate_point<C>(sizes: &CurveSizes, point: &[u8]) -> Result<()>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    parse_point::<C>(sizes, point).map(|_| ())
}

pub(crate) fn ecdh<C>(sizes: &CurveSizes, scalar: &[u8], peer_point: &[u8]) -> Result<SecretVec>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = parse_scalar::<C>(sizes, scalar)?;
    let peer = parse_point::<C>(sizes, peer_point)?;

    let shared = diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine());
    let z = SecretVec::from_slice(shared.raw_secret_bytes());
    trace!(curve = sizes.name, len = z.len(), "ECDH shared secret computed");

    validate::length(sizes.name, z.len(), sizes.scalar)?;
    Ok(z)
}

fn parse_scalar<C>(sizes: &CurveSizes, scalar: &[u8]) -> Result<SecretKey<C>>
where
    C: CurveArithmetic,
{
    validate::length(sizes.name, scalar.len(), sizes.scalar)?;
    SecretKey::<C>::from_slice(scalar).map_err(|_| Error::InvalidScalar { curve: sizes.name })
}

fn parse_point<C>(sizes: &CurveSizes, point: &[u8]) -> Result<PublicKey<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    if point.len() != sizes.point || point[0] != SEC1_UNCOMPRESSED_TAG {
        return Err(Error::InvalidPoint {
            curve: sizes.name,
            reason: "expected an uncompressed SEC1 point",
        });
    }
    // from_sec1_bytes rejects off-curve coordinates and the identity
    PublicKey::<C>::from_sec1_bytes(point).map_err(|_| Error::InvalidPoint {
        curve: sizes.name,
        reason: "not a point on the curve",
    })
}

fn encode_point<C>(public: &PublicKey<C>) -> Vec<u8>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    public.to_encoded_point(false).as_bytes().to_vec()
}
