//! Core model and evaluation pipeline for the verdict harness.
//!
//! A task pairs a description with a suite of test cases; a candidate
//! solution is checked by running every case once and aggregating the
//! pass/fail outcomes into a submission record. The test-case model is
//! polymorphic (basic string-equality cases plus complexity-gated
//! advanced cases) and the suite carries deep-copy value semantics with
//! an explicit shallow-copy escape hatch.

pub mod case;
pub mod manifest;
pub mod runner;
pub mod submission;
pub mod suite;
pub mod task;

pub use case::{AdvancedTestCase, BasicTestCase, TestCase};
pub use runner::{check_solution, run_test_case};
pub use submission::{ExecutionResult, Submission};
pub use suite::TestSuite;
pub use task::{Task, UserSolution};
