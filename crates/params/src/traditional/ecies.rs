//! Constants for the ECIES envelope and the key containers it consumes

use crate::utils::symmetric::{AES128_KEY_SIZE, GCM_VARIABLE_IV_SIZE};

/// Length of the X9.63 output consumed per message: AES-128 key followed by the GCM IV
pub const ECIES_DERIVED_STREAM_SIZE: usize = AES128_KEY_SIZE + GCM_VARIABLE_IV_SIZE;

/// Algorithm name of the only supported suite
pub const ECIES_SUITE_NAME: &str = "ECIES-Cofactor-VariableIV-X963-SHA384-AES128GCM";

/// DER SubjectPublicKeyInfo length for a P-256 key (named curve, uncompressed point)
pub const P256_SPKI_DER_SIZE: usize = 91;

/// DER SubjectPublicKeyInfo length for a P-384 key
pub const P384_SPKI_DER_SIZE: usize = 120;

/// DER SubjectPublicKeyInfo length for a P-521 key
pub const P521_SPKI_DER_SIZE: usize = 158;

/// DER SEC1 ECPrivateKey length for P-256 with parameters and public key present
pub const P256_SEC1_DER_SIZE: usize = 121;

/// DER SEC1 ECPrivateKey length for P-384 with parameters and public key present
pub const P384_SEC1_DER_SIZE: usize = 167;

/// DER SEC1 ECPrivateKey length for P-521 with parameters and public key present
pub const P521_SEC1_DER_SIZE: usize = 223;

/// DER PKCS#8 PrivateKeyInfo length for P-256 (inner SEC1 carries the public key, no parameters)
pub const P256_PKCS8_DER_SIZE: usize = 138;

/// DER PKCS#8 PrivateKeyInfo length for P-384
pub const P384_PKCS8_DER_SIZE: usize = 185;

/// DER PKCS#8 PrivateKeyInfo length for P-521
pub const P521_PKCS8_DER_SIZE: usize = 241;
