//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Size of the big-endian counter appended to Z by the ANSI X9.63 KDF
pub const X963_COUNTER_SIZE: usize = 4;
