//! ECDH key agreement between a private key and a peer's public point

use nistecies_common::SecretVec;
use tracing::trace;

use super::curve::Curve;
use super::keys::{RawPrivateKey, RawPublicKey};
use crate::error::{Error, Result};

/// ECDH output: the x-coordinate of the shared point
///
/// Always `curve.scalar_len()` bytes with leading zeros preserved. Wiped on
/// drop.
#[derive(Debug)]
pub struct SharedSecret {
    curve: Curve,
    z: SecretVec,
}

impl SharedSecret {
    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.z.as_slice()
    }
}

/// Compute the shared secret between `private` and `peer`
///
/// Both keys must be on the same curve. The peer point is revalidated
/// before use.
pub fn agree(private: &RawPrivateKey, peer: &RawPublicKey) -> Result<SharedSecret> {
    if private.curve() != peer.curve() {
        return Err(Error::CurveMismatch {
            expected: private.curve(),
            actual: peer.curve(),
        });
    }
    agree_with_point(private, peer.as_bytes())
}

/// Like [`agree`] but with the peer point still in wire form
///
/// Used on decryption, where the ephemeral point comes straight from the
/// envelope and has not been through [`RawPublicKey::new`].
pub(crate) fn agree_with_point(private: &RawPrivateKey, peer_point: &[u8]) -> Result<SharedSecret> {
    let curve = private.curve();
    let z = curve.ecdh(private.scalar(), peer_point)?;
    if z.len() != curve.scalar_len() {
        return Err(Error::KeyDerivationFailed("ECDH output has the wrong length"));
    }
    trace!(%curve, "ECDH agreement complete");
    Ok(SharedSecret { curve, z })
}
