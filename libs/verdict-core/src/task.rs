//! Task and candidate-solution holders.

use serde::{Deserialize, Serialize};

use crate::suite::TestSuite;

/// A description paired with its own snapshot of a test suite.
#[derive(Debug, Clone)]
pub struct Task {
    description: String,
    suite: TestSuite,
}

impl Task {
    /// The suite is deep-copied in; the task's snapshot is independent
    /// of the caller's suite.
    pub fn new(description: impl Into<String>, suite: &TestSuite) -> Self {
        Self {
            description: description.into(),
            suite: suite.clone(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn suite(&self) -> &TestSuite {
        &self.suite
    }
}

/// Opaque candidate payload. The harness never parses or executes it;
/// it is carried through to the submission record as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSolution {
    code: String,
}

impl UserSolution {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::case::BasicTestCase;

    #[test]
    fn task_snapshots_the_suite() {
        let mut suite = TestSuite::new();
        suite.add_test(BasicTestCase::new("a", "a"));

        let task = Task::new("Example Task", &suite);

        assert_eq!(task.description(), "Example Task");
        assert_eq!(task.suite().test_count(), 1);
        assert!(!Rc::ptr_eq(&task.suite().tests()[0], &suite.tests()[0]));
    }

    #[test]
    fn task_suite_survives_the_caller_dropping_theirs() {
        let task = {
            let mut suite = TestSuite::new();
            suite.add_test(BasicTestCase::new("a", "a"));
            Task::new("short-lived", &suite)
        };

        assert_eq!(task.suite().test_count(), 1);
    }

    #[test]
    fn solution_payload_is_kept_verbatim() {
        let solution = UserSolution::new("user_solution_code");
        assert_eq!(solution.code(), "user_solution_code");
    }
}
