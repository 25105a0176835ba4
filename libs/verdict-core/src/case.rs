//! Test-case variants.
//!
//! The variant set is closed: a basic case that checks exact string
//! equality, and an advanced case that additionally gates on a
//! complexity threshold. Both expose the same capability pair:
//! evaluate to a verdict, and duplicate into a fresh instance of the
//! same variant.

use std::fmt;
use std::rc::Rc;

use tracing::info;

/// Capability shared by every test-case variant.
pub trait TestCase: fmt::Debug {
    /// Raw input presented to the candidate solution.
    fn input(&self) -> &str;

    /// Output the case expects.
    fn expected(&self) -> &str;

    /// Pass/fail verdict for this case.
    ///
    /// Never fails; variants with diagnostics emit them here, before the
    /// verdict is computed.
    fn evaluate(&self) -> bool;

    /// New instance of the same dynamic variant with identical field
    /// values. The copy shares no storage with the original.
    fn duplicate(&self) -> Rc<dyn TestCase>;
}

/// Exact-match test case.
///
/// Passes iff `input` equals `expected`, case-sensitive, with no
/// normalization.
#[derive(Debug, Clone)]
pub struct BasicTestCase {
    input: String,
    expected: String,
}

impl BasicTestCase {
    pub fn new(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
        }
    }
}

impl TestCase for BasicTestCase {
    fn input(&self) -> &str {
        &self.input
    }

    fn expected(&self) -> &str {
        &self.expected
    }

    fn evaluate(&self) -> bool {
        self.input == self.expected
    }

    fn duplicate(&self) -> Rc<dyn TestCase> {
        Rc::new(self.clone())
    }
}

/// Complexity-gated test case.
///
/// On top of the exact-match check, the case only passes when its
/// complexity level is above 2. Each evaluation emits one diagnostic
/// line on the log channel before the verdict is computed.
#[derive(Debug, Clone)]
pub struct AdvancedTestCase {
    input: String,
    expected: String,
    complexity_level: i32,
}

impl AdvancedTestCase {
    pub fn new(
        input: impl Into<String>,
        expected: impl Into<String>,
        complexity_level: i32,
    ) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
            complexity_level,
        }
    }

    pub fn complexity_level(&self) -> i32 {
        self.complexity_level
    }
}

impl TestCase for AdvancedTestCase {
    fn input(&self) -> &str {
        &self.input
    }

    fn expected(&self) -> &str {
        &self.expected
    }

    fn evaluate(&self) -> bool {
        info!(
            "Running advanced test with complexity level: {}",
            self.complexity_level
        );
        self.input == self.expected && self.complexity_level > 2
    }

    fn duplicate(&self) -> Rc<dyn TestCase> {
        Rc::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_case_passes_on_exact_match() {
        assert!(BasicTestCase::new("input1", "input1").evaluate());
        assert!(BasicTestCase::new("", "").evaluate());
    }

    #[test]
    fn basic_case_fails_on_mismatch() {
        assert!(!BasicTestCase::new("input2", "expected2").evaluate());
    }

    #[test]
    fn basic_case_is_case_sensitive() {
        assert!(!BasicTestCase::new("Hello", "hello").evaluate());
    }

    #[test]
    fn basic_case_does_not_normalize_whitespace() {
        assert!(!BasicTestCase::new("hello", "hello ").evaluate());
    }

    #[test]
    fn advanced_case_passes_above_complexity_threshold() {
        assert!(AdvancedTestCase::new("out", "out", 3).evaluate());
        assert!(AdvancedTestCase::new("out", "out", 10).evaluate());
    }

    #[test]
    fn advanced_case_fails_at_or_below_threshold_despite_match() {
        assert!(!AdvancedTestCase::new("out", "out", 2).evaluate());
        assert!(!AdvancedTestCase::new("out", "out", 1).evaluate());
        assert!(!AdvancedTestCase::new("out", "out", 0).evaluate());
    }

    #[test]
    fn advanced_case_fails_on_mismatch_regardless_of_level() {
        assert!(!AdvancedTestCase::new("out", "other", 5).evaluate());
    }

    #[test]
    fn duplicate_copies_basic_fields() {
        let original = BasicTestCase::new("in", "out");
        let copy = original.duplicate();

        assert_eq!(copy.input(), "in");
        assert_eq!(copy.expected(), "out");
        assert!(!copy.evaluate());
    }

    #[test]
    fn duplicate_preserves_the_advanced_variant() {
        // A degraded copy would drop the complexity gate and pass on
        // string equality alone.
        let original = AdvancedTestCase::new("same", "same", 1);
        let copy = original.duplicate();

        assert_eq!(copy.input(), "same");
        assert_eq!(copy.expected(), "same");
        assert!(!copy.evaluate());

        let passing = AdvancedTestCase::new("same", "same", 4).duplicate();
        assert!(passing.evaluate());
    }
}
