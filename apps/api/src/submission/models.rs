use serde::{Deserialize, Serialize};

use crate::catalog::TestKind;

/// `run` checks sample tests only; `submit` grades against the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Run,
    Submit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    pub language: String,
    pub code: String,
    pub mode: Mode,
}

/// Overall outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerdictStatus {
    Accepted,
    #[serde(rename = "Failed Samples")]
    FailedSamples,
    #[serde(rename = "Wrong Answer")]
    WrongAnswer,
    #[serde(rename = "Compile Error")]
    CompileError,
    #[serde(rename = "Runtime Error")]
    RuntimeError,
}

impl VerdictStatus {
    /// Status used when an output mismatch is the first failure seen.
    pub fn mismatch_for(mode: Mode) -> Self {
        match mode {
            Mode::Run => VerdictStatus::FailedSamples,
            Mode::Submit => VerdictStatus::WrongAnswer,
        }
    }
}

/// Label attached to a test that stopped the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestError {
    #[serde(rename = "Compile Error")]
    CompileError,
    #[serde(rename = "Runtime Error")]
    RuntimeError,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TestKind,
    pub passed: bool,
    pub input: String,
    pub expected_output: String,
    /// Raw stdout, untrimmed.
    pub actual_output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TestError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub status: VerdictStatus,
    pub passed_count: usize,
    /// Size of the selected test set, even when evaluation stopped early.
    pub total_count: usize,
    pub test_results: Vec<TestResult>,
    pub compile_error: Option<String>,
    pub runtime_error: Option<String>,
}
