//! Raw key material and extraction from DER key containers
//!
//! Accepted containers, identified first by their exact length:
//!
//! | Shape | P-256 | P-384 | P-521 |
//! |---|---|---|---|
//! | SubjectPublicKeyInfo | 91 | 120 | 158 |
//! | SEC1 `ECPrivateKey` with `[0]` and `[1]` | 121 | 167 | 223 |
//! | PKCS#8 wrapping SEC1 with `[1]` only | 138 | 185 | 241 |
//!
//! A container of any other length is rejected with
//! [`Error::UnrecognizedKeyLength`]. A container of a known length is then
//! walked tag by tag; every deviation from the expected shape is reported as
//! [`Error::MalformedKeyContainer`].

use core::fmt;

use nistecies_common::ZeroizeGuard;
use nistecies_params::traditional::ecdh::{OID_EC_PUBLIC_KEY, SEC1_UNCOMPRESSED_TAG};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::curve::{ContainerKind, Curve};
use super::der::{DerReader, TAG_CONTEXT_0, TAG_CONTEXT_1};
use crate::error::{Error, Result};

const SEC1_VERSION: u8 = 1;
const PKCS8_VERSION: u8 = 0;

/// Uncompressed public point `0x04 || X || Y` on a known curve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawPublicKey {
    curve: Curve,
    bytes: Vec<u8>,
}

impl RawPublicKey {
    /// Validate and wrap an uncompressed point
    ///
    /// The point must have the curve's exact length, start with `0x04`, lie
    /// on the curve and not be the identity.
    pub fn new(curve: Curve, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != curve.point_len() {
            return Err(Error::InvalidPeerKey("point length does not match curve"));
        }
        if bytes[0] != SEC1_UNCOMPRESSED_TAG {
            return Err(Error::InvalidPeerKey("expected an uncompressed SEC1 point"));
        }
        curve.validate_point(bytes)?;
        Ok(Self {
            curve,
            bytes: bytes.to_vec(),
        })
    }

    /// Wrap an uncompressed point, inferring the curve from its length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let curve = Curve::from_point_len(bytes.len())
            .ok_or(Error::InvalidPeerKey("point length does not match any supported curve"))?;
        Self::new(curve, bytes)
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for RawPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Private key material laid out as `RawPublicKey || scalar`
///
/// The scalar is big-endian, exactly `curve.scalar_len()` bytes and in
/// `[1, n-1]`. The buffer is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RawPrivateKey {
    #[zeroize(skip)]
    curve: Curve,
    bytes: Vec<u8>,
}

impl RawPrivateKey {
    /// Validate and wrap `public || scalar`
    ///
    /// Besides the layout checks the public half must equal `scalar * G`.
    pub fn new(curve: Curve, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != curve.point_len() + curve.scalar_len() {
            return Err(Error::InvalidPrivateKey("length does not match curve"));
        }
        let (public, scalar) = bytes.split_at(curve.point_len());
        if public[0] != SEC1_UNCOMPRESSED_TAG {
            return Err(Error::InvalidPrivateKey("expected an uncompressed SEC1 point"));
        }

        let expected = curve.public_key_from_scalar(scalar)?;
        if expected != public {
            return Err(Error::InvalidPrivateKey("public key does not match scalar"));
        }

        Ok(Self {
            curve,
            bytes: bytes.to_vec(),
        })
    }

    /// Build the key from a bare scalar, computing the public half
    pub fn from_scalar(curve: Curve, scalar: &[u8]) -> Result<Self> {
        if scalar.len() != curve.scalar_len() {
            return Err(Error::InvalidPrivateKey("scalar length does not match curve"));
        }
        let public = curve.public_key_from_scalar(scalar)?;

        let mut bytes = Vec::with_capacity(curve.point_len() + curve.scalar_len());
        bytes.extend_from_slice(&public);
        bytes.extend_from_slice(scalar);
        Ok(Self { curve, bytes })
    }

    /// Fresh key pair with a scalar drawn uniformly from `[1, n-1]`
    pub fn generate<R: CryptoRng + RngCore>(curve: Curve, rng: &mut R) -> Result<Self> {
        let (scalar, public) = curve.generate_keypair(rng)?;

        let mut bytes = Vec::with_capacity(curve.point_len() + curve.scalar_len());
        bytes.extend_from_slice(&public);
        bytes.extend_from_slice(scalar.as_slice());
        Ok(Self { curve, bytes })
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// The public half as a [`RawPublicKey`]
    pub fn public_key(&self) -> RawPublicKey {
        RawPublicKey {
            curve: self.curve,
            bytes: self.bytes[..self.curve.point_len()].to_vec(),
        }
    }

    /// The big-endian scalar
    pub fn scalar(&self) -> &[u8] {
        &self.bytes[self.curve.point_len()..]
    }

    /// The full `public || scalar` encoding
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for RawPrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for RawPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawPrivateKey")
            .field("curve", &self.curve)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Extract the public point from a DER SubjectPublicKeyInfo
pub fn extract_public_key(container: &[u8]) -> Result<RawPublicKey> {
    let kind = ContainerKind::SubjectPublicKeyInfo;
    let curve = Curve::from_container_len(kind, container.len()).ok_or(
        Error::UnrecognizedKeyLength {
            actual: container.len(),
        },
    )?;

    let mut outer = DerReader::new(container);
    let mut spki = outer.read_sequence()?;
    outer.finish()?;

    let mut algorithm = spki.read_sequence()?;
    expect_ec_algorithm(&mut algorithm, curve)?;
    algorithm.finish()?;

    let point = spki.read_bit_string()?;
    spki.finish()?;
    check_point_shape(curve, point)?;

    debug!(%curve, ?kind, "extracted public key");
    RawPublicKey::new(curve, point)
}

/// Extract `public || scalar` from a DER SEC1 or PKCS#8 private key
pub fn extract_private_key(container: &[u8]) -> Result<RawPrivateKey> {
    let (curve, kind) = [ContainerKind::Sec1, ContainerKind::Pkcs8]
        .into_iter()
        .find_map(|kind| Curve::from_container_len(kind, container.len()).map(|c| (c, kind)))
        .ok_or(Error::UnrecognizedKeyLength {
            actual: container.len(),
        })?;

    let mut outer = DerReader::new(container);
    let (scalar, point) = match kind {
        ContainerKind::Sec1 => parse_ec_private_key(&mut outer, curve, true)?,
        ContainerKind::Pkcs8 => {
            let mut info = outer.read_sequence()?;
            if info.read_small_integer()? != PKCS8_VERSION {
                return Err(Error::MalformedKeyContainer("unexpected PKCS#8 version"));
            }
            let mut algorithm = info.read_sequence()?;
            expect_ec_algorithm(&mut algorithm, curve)?;
            algorithm.finish()?;

            let mut inner = DerReader::new(info.read_octet_string()?);
            let parts = parse_ec_private_key(&mut inner, curve, false)?;
            inner.finish()?;
            info.finish()?;
            parts
        }
        ContainerKind::SubjectPublicKeyInfo => {
            return Err(Error::MalformedKeyContainer("not a private key container"))
        }
    };
    outer.finish()?;
    check_point_shape(curve, point)?;

    let mut bytes = Vec::with_capacity(point.len() + scalar.len());
    bytes.extend_from_slice(point);
    bytes.extend_from_slice(scalar);
    let bytes = ZeroizeGuard::new(&mut bytes);

    debug!(%curve, ?kind, "extracted private key");
    RawPrivateKey::new(curve, &bytes)
}

/// Parse an `ECPrivateKey` and return `(scalar, point)`
///
/// `[0]` parameters are mandatory for bare SEC1 and, when present inside
/// PKCS#8, must still name the expected curve. `[1]` is always required.
fn parse_ec_private_key<'a>(
    reader: &mut DerReader<'a>,
    curve: Curve,
    require_parameters: bool,
) -> Result<(&'a [u8], &'a [u8])> {
    let mut key = reader.read_sequence()?;
    if key.read_small_integer()? != SEC1_VERSION {
        return Err(Error::MalformedKeyContainer("unexpected ECPrivateKey version"));
    }

    let scalar = key.read_octet_string()?;
    if scalar.len() != curve.scalar_len() {
        return Err(Error::MalformedKeyContainer("scalar length does not match curve"));
    }

    if key.peek_tag() == Some(TAG_CONTEXT_0) {
        let mut parameters = key.read_context(TAG_CONTEXT_0)?;
        expect_curve_oid(&mut parameters, curve)?;
        parameters.finish()?;
    } else if require_parameters {
        return Err(Error::MalformedKeyContainer("missing ECPrivateKey parameters"));
    }

    let mut public = key.read_context(TAG_CONTEXT_1)?;
    let point = public.read_bit_string()?;
    public.finish()?;
    key.finish()?;

    Ok((scalar, point))
}

fn expect_ec_algorithm(algorithm: &mut DerReader<'_>, curve: Curve) -> Result<()> {
    if algorithm.read_oid()? != OID_EC_PUBLIC_KEY {
        return Err(Error::MalformedKeyContainer("algorithm is not id-ecPublicKey"));
    }
    expect_curve_oid(algorithm, curve)
}

fn expect_curve_oid(reader: &mut DerReader<'_>, curve: Curve) -> Result<()> {
    if reader.read_oid()? != curve.oid() {
        return Err(Error::MalformedKeyContainer(
            "named curve does not match container size",
        ));
    }
    Ok(())
}

fn check_point_shape(curve: Curve, point: &[u8]) -> Result<()> {
    if point.len() != curve.point_len() || point[0] != SEC1_UNCOMPRESSED_TAG {
        return Err(Error::MalformedKeyContainer(
            "public key is not an uncompressed point for the curve",
        ));
    }
    Ok(())
}
