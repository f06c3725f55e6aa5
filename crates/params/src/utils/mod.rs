//! Constants for the symmetric and hash building blocks

pub mod hash;
pub mod symmetric;
