//! Known-answer suites for ECIES stored as JSON under `src/vectors/ecies`.
//!
//! Use as `use nistecies_tests::suites::ecies::*;`.

pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod runner;

pub use engine::run_case;
pub use error::*;
pub use loader::*;
pub use model::*;
pub use runner::*;
