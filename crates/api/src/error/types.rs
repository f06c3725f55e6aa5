//! Error type definitions for cryptographic operations

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        message: String,
    },


    /// Invalid ciphertext error
    InvalidCiphertext {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },



    /// Not implemented error
    NotImplemented {
        feature: &'static str,
    },

    /// Authentication failed error
    AuthenticationFailed {
        context: &'static str,
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidCiphertext { message, .. } => Self::InvalidCiphertext { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::NotImplemented { feature } => Self::NotImplemented { feature },
            Self::AuthenticationFailed { message, .. } => {
                Self::AuthenticationFailed { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidCiphertext { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::AuthenticationFailed { context, .. }
            | Self::Other { context, .. } => context,
            Self::NotImplemented { feature } => feature,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}", context)?;
                write_message(f, message)
            }
            Self::InvalidCiphertext { context, message } => {
                write!(f, "Invalid ciphertext: {}", context)?;
                write_message(f, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter: {}", context)?;
                write_message(f, message)
            }
            Self::NotImplemented { feature } => {
                write!(f, "{} is not implemented", feature)
            }
            Self::AuthenticationFailed { context, message } => {
                write!(f, "Authentication failed: {}", context)?;
                write_message(f, message)
            }
            Self::Other { context, message } => {
                write!(f, "{}", context)?;
                write_message(f, message)
            }
        }
    }
}

fn write_message(f: &mut core::fmt::Formatter<'_>, message: &str) -> core::fmt::Result {
    if message.is_empty() {
        Ok(())
    } else {
        write!(f, ": {}", message)
    }
}
