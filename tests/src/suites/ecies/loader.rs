//! Loads ECIES vector suites from JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use nistecies_pke::Curve;

use super::error::{EngineError, Result};
use super::model::TestSuite;

fn vector_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("ecies")
}

/// Resolve a curve by its display name (`P-256`, ...)
pub fn parse_curve(name: &str) -> Result<Curve> {
    Curve::ALL
        .into_iter()
        .find(|c| c.name() == name)
        .ok_or_else(|| EngineError::UnknownCurve(name.to_string()))
}

/// Load `src/vectors/ecies/<file_stem>.json`
pub fn load_suite(file_stem: &str) -> Result<TestSuite> {
    let path = vector_dir().join(format!("{}.json", file_stem));
    let json = fs::read_to_string(&path).map_err(|source| EngineError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let suite: TestSuite = serde_json::from_str(&json)?;
    parse_curve(&suite.curve)?;
    for group in &suite.groups {
        parse_curve(&group.curve)?;
    }
    Ok(suite)
}

/// Load every curve's suite
pub fn load_all_suites() -> Result<Vec<TestSuite>> {
    ["p256", "p384", "p521"]
        .into_iter()
        .map(load_suite)
        .collect()
}

/// Decode a required hex field
pub fn hex_field(value: &Option<String>, name: &'static str) -> Result<Vec<u8>> {
    let text = value.as_deref().ok_or(EngineError::MissingField(name))?;
    Ok(hex::decode(text)?)
}
