//! Structured error types for the ECIES vector engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ECIES operation failed: {0}")]
    Ecies(#[from] nistecies_pke::Error),

    #[error("unknown curve: {0}")]
    UnknownCurve(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("mismatch - expected: {expected}, got: {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("{failed} of {total} cases failed")]
    SuiteFailed { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
