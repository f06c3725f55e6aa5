//! Public API traits and types for the nistecies library
//!
//! This crate provides the public API surface shared by the nistecies crates:
//! the trait-level error type and the public key encryption trait.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::Pke;

// Re-export trait modules for direct access
pub use traits::pke;
