//! Executes one vector case against the library.

use nistecies_pke::{ecies, EciesEngine};
use tracing::trace;

use super::error::{EngineError, Result};
use super::loader::{hex_field, parse_curve};
use super::model::{TestCase, TestGroup, TestType};

fn expect_bytes(expected: &[u8], actual: &[u8]) -> Result<()> {
    if expected != actual {
        return Err(EngineError::Mismatch {
            expected: hex::encode(expected),
            actual: hex::encode(actual),
        });
    }
    Ok(())
}

/// Run `case`; `Ok(())` means the library produced the expected output
pub fn run_case(group: &TestGroup, case: &TestCase) -> Result<()> {
    let curve = parse_curve(&group.curve)?;
    trace!(%curve, tc_id = case.tc_id, test_type = ?group.test_type, "running case");

    match group.test_type {
        TestType::ExtractPublic => {
            let container = hex_field(&case.container, "container")?;
            let key = ecies::extract_public_key(&container)?;
            expect_bytes(curve.name().as_bytes(), key.curve().name().as_bytes())?;
            expect_bytes(&hex_field(&case.expected, "expected")?, key.as_bytes())
        }
        TestType::ExtractPrivate => {
            let container = hex_field(&case.container, "container")?;
            let key = ecies::extract_private_key(&container)?;
            expect_bytes(curve.name().as_bytes(), key.curve().name().as_bytes())?;
            expect_bytes(&hex_field(&case.expected, "expected")?, key.as_bytes())
        }
        TestType::Decrypt => {
            let private = ecies::extract_private_key(&hex_field(&group.private_key, "privateKey")?)?;
            let envelope = hex_field(&case.envelope, "envelope")?;
            let shared_info = match &case.shared_info {
                Some(text) => Some(hex::decode(text)?),
                None => None,
            };

            let plaintext =
                EciesEngine::default().decrypt(&envelope, &private, shared_info.as_deref())?;
            expect_bytes(&hex_field(&case.message, "message")?, &plaintext)
        }
    }
}
