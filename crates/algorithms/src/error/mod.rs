//! Error handling for cryptographic primitives

use std::borrow::Cow;
use std::fmt;

use nistecies_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Scalar is zero or not below the group order
    InvalidScalar {
        /// Curve the scalar was meant for
        curve: &'static str,
    },

    /// Point failed validation (encoding, on-curve, identity)
    InvalidPoint {
        /// Curve the point was meant for
        curve: &'static str,
        /// What was wrong with it
        reason: &'static str,
    },

    /// Authentication failure (e.g., AEAD tag verification)
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// Processing error during cryptographic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidScalar { curve } => {
                write!(f, "Invalid {} scalar: zero or not below the group order", curve)
            }
            Error::InvalidPoint { curve, reason } => {
                write!(f, "Invalid {} point: {}", curve, reason)
            }
            Error::Authentication { algorithm } => {
                write!(f, "Authentication failed for {}", algorithm)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "primitive parameter",
                message: format!("{}: {}", name, reason),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InvalidScalar { curve } => CoreError::InvalidKey {
                context: curve,
                message: "scalar is zero or not below the group order".to_string(),
            },
            Error::InvalidPoint { curve, reason } => CoreError::InvalidKey {
                context: curve,
                message: reason.to_string(),
            },
            Error::Authentication { algorithm } => CoreError::AuthenticationFailed {
                context: algorithm,
                message: "authentication failed".to_string(),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "primitives",
                message: msg.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
