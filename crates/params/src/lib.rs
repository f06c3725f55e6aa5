//! Constant values for the nistecies library
//!
//! Sizes, object identifiers and container lengths shared by the
//! algorithm and PKE crates. This crate has no dependencies.

#![no_std]

pub mod traditional;
pub mod utils;
