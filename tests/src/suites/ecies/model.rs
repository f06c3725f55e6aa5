//! Pure data model for the ECIES vector files.

use serde::Deserialize;

/// What a group exercises
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TestType {
    ExtractPublic,
    ExtractPrivate,
    Decrypt,
}

/// Whether a case must succeed or be rejected
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedResult {
    #[default]
    Valid,
    Invalid,
}

/// Leaf-level test case; all byte fields are hex
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub tc_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub container: Option<String>,
    #[serde(default)]
    pub envelope: Option<String>,
    #[serde(default)]
    pub shared_info: Option<String>,
    /// Raw key bytes an extraction case must produce
    #[serde(default)]
    pub expected: Option<String>,
    /// Plaintext a decrypt case must produce
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub expected_result: ExpectedResult,
}

/// Cases sharing a curve, an operation and (for decrypt) a recipient key
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    pub tg_id: u64,
    pub curve: String,
    pub test_type: TestType,
    /// DER container of the recipient key for decrypt groups
    #[serde(default)]
    pub private_key: Option<String>,
    pub tests: Vec<TestCase>,
}

/// One vector file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub suite: String,
    pub curve: String,
    #[serde(rename = "testGroups")]
    pub groups: Vec<TestGroup>,
}

impl TestSuite {
    pub fn case_count(&self) -> usize {
        self.groups.iter().map(|g| g.tests.len()).sum()
    }
}
