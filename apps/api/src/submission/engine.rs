//! Verdict Engine — runs a submission against a problem's test set and folds
//! the per-test judge results into one `Verdict`.
//!
//! Algorithm:
//! 1. Select tests: samples for `run`; samples then hidden tests for `submit`.
//! 2. `total_count` is fixed at selection time.
//! 3. Execute tests strictly in order, one judge call at a time.
//!    - compile output present → record, status = Compile Error, stop
//!    - stderr present → record, status = Runtime Error, stop
//!    - otherwise compare trimmed stdout with trimmed expected output; the first
//!      mismatch downgrades Accepted to Failed Samples / Wrong Answer, once.
//! 4. A judge transport failure aborts the whole evaluation; no partial verdict.
//!
//! The caller has already checked that `language` is allowed for the problem.

use tracing::debug;

use crate::catalog::{Problem, TestCase};
use crate::judge_client::{CodeExecutor, ExecutionResult, JudgeError};
use crate::submission::models::{Mode, TestError, TestResult, Verdict, VerdictStatus};

/// Tests evaluated for `mode`, in evaluation order.
pub fn select_tests(problem: &Problem, mode: Mode) -> Vec<&TestCase> {
    match mode {
        Mode::Run => problem.sample_tests.iter().collect(),
        Mode::Submit => problem
            .sample_tests
            .iter()
            .chain(problem.hidden_tests.iter())
            .collect(),
    }
}

pub async fn evaluate(
    executor: &dyn CodeExecutor,
    problem: &Problem,
    language: &str,
    source_code: &str,
    mode: Mode,
) -> Result<Verdict, JudgeError> {
    let tests = select_tests(problem, mode);

    let mut verdict = Verdict {
        status: VerdictStatus::Accepted,
        passed_count: 0,
        total_count: tests.len(),
        test_results: Vec::with_capacity(tests.len()),
        compile_error: None,
        runtime_error: None,
    };

    for (index, test) in tests.into_iter().enumerate() {
        let result = executor.execute(source_code, language, &test.input).await?;

        debug!(
            problem_id = %problem.id,
            test = index + 1,
            judge_status = %result.status.description,
            "Test executed"
        );

        if result.compile_failed() {
            verdict.status = VerdictStatus::CompileError;
            verdict
                .test_results
                .push(failed_result(test, &result, TestError::CompileError));
            verdict.compile_error = Some(result.compile_output);
            break;
        }

        if result.runtime_failed() {
            verdict.status = VerdictStatus::RuntimeError;
            verdict
                .test_results
                .push(failed_result(test, &result, TestError::RuntimeError));
            verdict.runtime_error = Some(result.stderr);
            break;
        }

        let passed = outputs_match(&result.stdout, &test.output);
        if passed {
            verdict.passed_count += 1;
        } else if verdict.status == VerdictStatus::Accepted {
            verdict.status = VerdictStatus::mismatch_for(mode);
        }

        verdict.test_results.push(TestResult {
            name: test.name.clone(),
            kind: test.kind,
            passed,
            input: test.input.clone(),
            expected_output: test.output.clone(),
            actual_output: result.stdout,
            error: None,
        });
    }

    Ok(verdict)
}

/// Exact equality after trimming surrounding whitespace; nothing else is normalised.
fn outputs_match(actual: &str, expected: &str) -> bool {
    actual.trim() == expected.trim()
}

fn failed_result(test: &TestCase, result: &ExecutionResult, error: TestError) -> TestResult {
    TestResult {
        name: test.name.clone(),
        kind: test.kind,
        passed: false,
        input: test.input.clone(),
        expected_output: test.output.clone(),
        actual_output: result.stdout.clone(),
        error: Some(error),
    }
}
