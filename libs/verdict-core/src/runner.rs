//! Evaluation pipeline.
//!
//! **Core responsibility:**
//! Run every test case of a task against a candidate solution, exactly
//! once each, and aggregate the outcomes into a `Submission`.
//!
//! **Critical properties:**
//! - Each case's `evaluate()` is invoked a single time per result; both
//!   the output label and the pass flag derive from that one verdict,
//!   so a case's diagnostics fire once per run.
//! - Results are stored at the index matching the suite's insertion
//!   order.
//! - Total function: an empty suite yields an empty, zero-passed
//!   submission rather than an error.

use tracing::{debug, info};

use crate::case::TestCase;
use crate::submission::{ExecutionResult, Submission};
use crate::task::{Task, UserSolution};

/// Runs one case and records its outcome.
///
/// The solution rides along for signature parity with `check_solution`;
/// the harness never executes it, the case alone decides the verdict.
pub fn run_test_case(_solution: &UserSolution, case: &dyn TestCase) -> ExecutionResult {
    let passed = case.evaluate();
    let actual_output = if passed { "Passed" } else { "Failed" };

    ExecutionResult {
        actual_output: actual_output.to_string(),
        passed,
    }
}

/// Runs the task's whole suite in insertion order and aggregates the
/// pass count into a submission sized to the suite.
pub fn check_solution(solution: &UserSolution, task: &Task) -> Submission {
    let suite = task.suite();
    let mut submission = Submission::new(solution.clone(), suite.test_count());
    let mut total_passed = 0u32;

    for (index, case) in suite.tests().iter().enumerate() {
        let result = run_test_case(solution, case.as_ref());
        debug!(
            test_num = index + 1,
            passed = result.passed,
            "Test evaluated"
        );
        if result.passed {
            total_passed += 1;
        }
        submission.set_result(index, result);
    }

    submission.set_total_passed(total_passed);
    info!(
        submission_id = %submission.id(),
        total_passed,
        test_count = suite.test_count(),
        "Solution checked"
    );

    submission
}
