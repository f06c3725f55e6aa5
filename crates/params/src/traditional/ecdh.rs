//! Constants for Elliptic Curve Diffie-Hellman on the NIST prime curves

/// Size of shared secret for ECDH using P-256 in bytes
pub const ECDH_P256_SHARED_SECRET_SIZE: usize = 32;

/// Size of shared secret for ECDH using P-384 in bytes
pub const ECDH_P384_SHARED_SECRET_SIZE: usize = 48;

/// Size of shared secret for ECDH using P-521 in bytes
pub const ECDH_P521_SHARED_SECRET_SIZE: usize = 66;

/// Size of public key for ECDH using P-256 in bytes (uncompressed format)
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = 65;

/// Size of public key for ECDH using P-384 in bytes (uncompressed format)
pub const ECDH_P384_PUBLIC_KEY_SIZE: usize = 97;

/// Size of public key for ECDH using P-521 in bytes (uncompressed format)
pub const ECDH_P521_PUBLIC_KEY_SIZE: usize = 133;

/// Size of private key for ECDH using P-256 in bytes
pub const ECDH_P256_PRIVATE_KEY_SIZE: usize = 32;

/// Size of private key for ECDH using P-384 in bytes
pub const ECDH_P384_PRIVATE_KEY_SIZE: usize = 48;

/// Size of private key for ECDH using P-521 in bytes
pub const ECDH_P521_PRIVATE_KEY_SIZE: usize = 66;

/// Leading byte of an uncompressed SEC1 point
pub const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// DER content bytes of id-ecPublicKey (1.2.840.10045.2.1)
pub const OID_EC_PUBLIC_KEY: &[u8] = &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01];

/// DER content bytes of prime256v1 / secp256r1 (1.2.840.10045.3.1.7)
pub const OID_P256: &[u8] = &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07];

/// DER content bytes of secp384r1 (1.3.132.0.34)
pub const OID_P384: &[u8] = &[0x2b, 0x81, 0x04, 0x00, 0x22];

/// DER content bytes of secp521r1 (1.3.132.0.35)
pub const OID_P521: &[u8] = &[0x2b, 0x81, 0x04, 0x00, 0x23];
