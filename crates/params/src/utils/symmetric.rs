//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// GCM authentication tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;

/// GCM IV size used by the variable-IV ECIES variant (one full block,
/// GHASHed into the initial counter rather than used as a 96-bit nonce)
pub const GCM_VARIABLE_IV_SIZE: usize = 16;
