//! Error handling for PKE operations.

use core::fmt;

use nistecies_algorithms::error::Error as PrimitiveError;
use nistecies_api::error::Error as CoreError;

use crate::ecies::Curve;

/// Error type for PKE operations.
#[derive(Debug)]
pub enum Error {
    /// Container length is not one of the known SPKI / SEC1 / PKCS#8 sizes
    UnrecognizedKeyLength { actual: usize },
    /// Container has a known length but not the expected DER structure
    MalformedKeyContainer(&'static str),
    /// Private scalar is zero, not below the group order, or inconsistent
    InvalidPrivateKey(&'static str),
    /// Public point fails encoding, curve-membership or identity checks
    InvalidPeerKey(&'static str),
    /// Keys or envelope belong to different curves
    CurveMismatch { expected: Curve, actual: Curve },
    /// Envelope cannot hold an ephemeral point and a tag
    EnvelopeTooShort { minimum: usize, actual: usize },
    /// GCM tag verification failed
    AuthenticationFailed,
    /// Suite name or component other than the one supported
    UnsupportedAlgorithm(&'static str),
    /// KDF produced output of an unexpected shape
    KeyDerivationFailed(&'static str),
    /// Error from the underlying primitives
    Primitive(PrimitiveError),
    /// Error from the API layer
    Api(CoreError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnrecognizedKeyLength { actual } => {
                write!(f, "Unrecognized key container length: {} bytes", actual)
            }
            Error::MalformedKeyContainer(reason) => {
                write!(f, "Malformed key container: {}", reason)
            }
            Error::InvalidPrivateKey(reason) => write!(f, "Invalid private key: {}", reason),
            Error::InvalidPeerKey(reason) => write!(f, "Invalid public key: {}", reason),
            Error::CurveMismatch { expected, actual } => {
                write!(f, "Curve mismatch: expected {}, got {}", expected, actual)
            }
            Error::EnvelopeTooShort { minimum, actual } => write!(
                f,
                "ECIES envelope too short: need at least {} bytes, got {}",
                minimum, actual
            ),
            Error::AuthenticationFailed => write!(f, "ECIES authentication failed"),
            Error::UnsupportedAlgorithm(name) => write!(f, "Unsupported algorithm: {}", name),
            Error::KeyDerivationFailed(reason) => {
                write!(f, "PKE key derivation failed: {}", reason)
            }
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Api(e) => write!(f, "PKE API error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::Authentication { .. } => Error::AuthenticationFailed,
            PrimitiveError::InvalidPoint { reason, .. } => Error::InvalidPeerKey(reason),
            PrimitiveError::InvalidScalar { .. } => {
                Error::InvalidPrivateKey("scalar is zero or not below the group order")
            }
            other => Error::Primitive(other),
        }
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::UnrecognizedKeyLength { actual } => CoreError::InvalidKey {
                context: "ECIES key container",
                message: format!("unrecognized length {}", actual),
            },
            Error::MalformedKeyContainer(reason) => CoreError::InvalidKey {
                context: "ECIES key container",
                message: reason.to_string(),
            },
            Error::InvalidPrivateKey(reason) => CoreError::InvalidKey {
                context: "ECIES private key",
                message: reason.to_string(),
            },
            Error::InvalidPeerKey(reason) => CoreError::InvalidKey {
                context: "ECIES public key",
                message: reason.to_string(),
            },
            Error::CurveMismatch { expected, actual } => CoreError::InvalidKey {
                context: "ECIES curve",
                message: format!("expected {}, got {}", expected, actual),
            },
            Error::EnvelopeTooShort { minimum, actual } => CoreError::InvalidLength {
                context: "ECIES envelope",
                expected: minimum,
                actual,
            },
            Error::AuthenticationFailed => CoreError::AuthenticationFailed {
                context: "ECIES Decryption",
                message: "AEAD authentication failed".to_string(),
            },
            Error::UnsupportedAlgorithm(name) => CoreError::NotImplemented { feature: name },
            Error::KeyDerivationFailed(reason) => CoreError::Other {
                context: "ECIES KDF",
                message: reason.to_string(),
            },
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
