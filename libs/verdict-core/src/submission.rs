//! Outcome records: one per test case, aggregated per submission.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::UserSolution;

/// Outcome of a single test case. The default state is "not yet run":
/// empty output, not passed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub actual_output: String,
    pub passed: bool,
}

/// Recorded outcome of running a solution against a task.
///
/// The result sequence is sized to the task's test count at
/// construction and its indices correspond 1:1 to the suite's
/// insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    id: Uuid,
    solution: UserSolution,
    results: Vec<ExecutionResult>,
    total_passed: u32,
}

impl Submission {
    pub fn new(solution: UserSolution, test_count: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            solution,
            results: vec![ExecutionResult::default(); test_count],
            total_passed: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn solution(&self) -> &UserSolution {
        &self.solution
    }

    pub fn results(&self) -> &[ExecutionResult] {
        &self.results
    }

    pub fn total_passed(&self) -> u32 {
        self.total_passed
    }

    /// Stores the outcome for the test at `index`.
    pub fn set_result(&mut self, index: usize, result: ExecutionResult) {
        self.results[index] = result;
    }

    /// Set once, after every test has run.
    pub fn set_total_passed(&mut self, total_passed: u32) {
        self.total_passed = total_passed;
    }
}
