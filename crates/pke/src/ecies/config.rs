//! Algorithm suite selection
//!
//! Exactly one suite exists, `ECIES-Cofactor-VariableIV-X963-SHA384-AES128GCM`.
//! It is still modelled as data so the engine is configured explicitly and
//! callers can load the choice from configuration files (with the `serde`
//! feature) and have unknown suites rejected.

use core::fmt;
use core::str::FromStr;

use nistecies_params::traditional::ecies::ECIES_SUITE_NAME;

use crate::error::Error;

/// Hash function inside the KDF
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum KdfHash {
    #[default]
    Sha384,
}

/// KDF construction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum KdfScheme {
    /// ANSI X9.63 counter-mode hash KDF
    #[default]
    X963,
}

/// Authenticated cipher
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AeadAlgorithm {
    #[default]
    Aes128Gcm,
}

/// How the GCM IV is obtained
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IvVariant {
    /// 16-byte IV taken from the KDF output after the key
    #[default]
    Variable,
}

/// Complete description of the ECIES algorithm combination
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case", deny_unknown_fields))]
pub struct AlgorithmSuite {
    pub kdf_hash: KdfHash,
    pub kdf_scheme: KdfScheme,
    pub aead: AeadAlgorithm,
    pub iv_variant: IvVariant,
}

impl AlgorithmSuite {
    /// The cofactor / variable-IV / X9.63 SHA-384 / AES-128-GCM suite
    pub const fn cofactor_variable_iv_x963_sha384_aes128gcm() -> Self {
        Self {
            kdf_hash: KdfHash::Sha384,
            kdf_scheme: KdfScheme::X963,
            aead: AeadAlgorithm::Aes128Gcm,
            iv_variant: IvVariant::Variable,
        }
    }

    /// Canonical name of the suite
    pub fn name(&self) -> &'static str {
        match (self.kdf_hash, self.kdf_scheme, self.aead, self.iv_variant) {
            (KdfHash::Sha384, KdfScheme::X963, AeadAlgorithm::Aes128Gcm, IvVariant::Variable) => {
                ECIES_SUITE_NAME
            }
        }
    }
}

impl fmt::Display for AlgorithmSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmSuite {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ECIES_SUITE_NAME {
            Ok(Self::cofactor_variable_iv_x963_sha384_aes128gcm())
        } else {
            Err(Error::UnsupportedAlgorithm("unknown ECIES suite name"))
        }
    }
}
