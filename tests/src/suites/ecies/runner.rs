//! Walks a `TestSuite` and tallies results.

use tracing::{info, warn};

use super::engine::run_case;
use super::error::{EngineError, Result};
use super::model::{ExpectedResult, TestSuite};

/// Outcome counts for one suite
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

/// Run every case; errors when any case disagrees with its expected result
pub fn run_suite(suite: &TestSuite) -> Result<Summary> {
    let mut summary = Summary::default();

    for group in &suite.groups {
        info!(
            tg_id = group.tg_id,
            curve = %group.curve,
            test_type = ?group.test_type,
            cases = group.tests.len(),
            "running group"
        );

        for case in &group.tests {
            match (run_case(group, case), case.expected_result) {
                (Ok(()), ExpectedResult::Valid) | (Err(_), ExpectedResult::Invalid) => {
                    summary.passed += 1;
                }
                (Ok(()), ExpectedResult::Invalid) => {
                    summary.failed += 1;
                    warn!(tc_id = case.tc_id, description = ?case.description, "case succeeded but was expected to fail");
                }
                (Err(e), ExpectedResult::Valid) => {
                    summary.failed += 1;
                    warn!(tc_id = case.tc_id, description = ?case.description, error = %e, "case failed");
                }
            }
        }
    }

    info!(suite = %suite.suite, passed = summary.passed, failed = summary.failed, "suite finished");
    if summary.failed > 0 {
        return Err(EngineError::SuiteFailed {
            failed: summary.failed,
            total: suite.case_count(),
        });
    }
    Ok(summary)
}
