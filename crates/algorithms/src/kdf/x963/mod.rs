//! ANSI X9.63 key derivation function (SEC 1 v2, section 3.6.1)

use core::marker::PhantomData;

use nistecies_common::{SecretBuffer, SecretVec};
use nistecies_params::utils::hash::X963_COUNTER_SIZE;
use sha2::digest::{generic_array::GenericArray, Digest};
use sha2::Sha384;
use tracing::trace;

use crate::error::{validate, Error, Result};

/// X9.63 KDF over any `Digest`
pub struct X963Kdf<H: Digest> {
    _hash: PhantomData<H>,
}

/// The instantiation used by the ECIES suite
pub type X963Sha384 = X963Kdf<Sha384>;

impl<H: Digest> X963Kdf<H> {
    /// Largest output the 32-bit counter can cover
    pub fn max_output_len() -> u64 {
        (<H as Digest>::output_size() as u64) * u64::from(u32::MAX)
    }

    /// Derive `length` bytes from the shared secret `z`
    ///
    /// `shared_info` of `None` is the same as an empty slice.
    pub fn derive(z: &[u8], shared_info: Option<&[u8]>, length: usize) -> Result<SecretVec> {
        validate::parameter(length > 0, "length", "X9.63 output length must be non-zero")?;
        if length as u64 > Self::max_output_len() {
            return Err(Error::param(
                "length",
                "X9.63 output length exceeds hash_len * (2^32 - 1)",
            ));
        }

        let hash_len = <H as Digest>::output_size();
        let info = shared_info.unwrap_or(&[]);
        let blocks = length.div_ceil(hash_len);

        let mut okm = SecretVec::new(vec![0u8; blocks * hash_len]);
        for (i, block) in okm.as_mut_slice().chunks_exact_mut(hash_len).enumerate() {
            // blocks <= u32::MAX was checked above
            let counter = (i as u32) + 1;
            let mut hasher = H::new();
            Digest::update(&mut hasher, z);
            Digest::update(&mut hasher, counter.to_be_bytes());
            Digest::update(&mut hasher, info);
            hasher.finalize_into(GenericArray::from_mut_slice(block));
        }
        okm.truncate(length);

        trace!(
            counter_size = X963_COUNTER_SIZE,
            rounds = blocks,
            length,
            "X9.63 derivation complete"
        );
        Ok(okm)
    }

    /// Derive exactly `N` bytes into a fixed-size secret buffer
    pub fn derive_array<const N: usize>(
        z: &[u8],
        shared_info: Option<&[u8]>,
    ) -> Result<SecretBuffer<N>> {
        let okm = Self::derive(z, shared_info, N)?;
        SecretBuffer::from_slice(okm.as_slice()).ok_or(Error::Length {
            context: "X9.63 output",
            expected: N,
            actual: okm.len(),
        })
    }
}
