//! Traits implemented by the nistecies schemes

pub mod pke;

pub use pke::Pke;
