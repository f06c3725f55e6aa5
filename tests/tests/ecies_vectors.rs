use nistecies_tests::init_test_logging;
use nistecies_tests::suites::ecies::{loader, run_suite, ExpectedResult, TestType};

fn run(file_stem: &str) {
    init_test_logging();
    let suite = loader::load_suite(file_stem)
        .unwrap_or_else(|e| panic!("Failed to load {} vectors: {}", file_stem, e));

    let summary = run_suite(&suite).unwrap_or_else(|e| panic!("{} vectors failed: {}", file_stem, e));
    assert_eq!(summary.passed, suite.case_count());
}

#[test]
fn test_p256_vectors() {
    run("p256");
}

#[test]
fn test_p384_vectors() {
    run("p384");
}

#[test]
fn test_p521_vectors() {
    run("p521");
}

#[test]
fn test_every_suite_covers_all_operations() {
    for suite in loader::load_all_suites().expect("Failed to load vectors") {
        for test_type in [TestType::ExtractPublic, TestType::ExtractPrivate, TestType::Decrypt] {
            let group = suite
                .groups
                .iter()
                .find(|g| g.test_type == test_type)
                .unwrap_or_else(|| panic!("{} has no {:?} group", suite.curve, test_type));
            assert!(group.tests.iter().any(|t| t.expected_result == ExpectedResult::Valid));
            assert!(group.tests.iter().any(|t| t.expected_result == ExpectedResult::Invalid));
        }
    }
}
