//! Ordered, owning collection of test cases.
//!
//! A suite deep-copies by default: `Clone` re-creates every element
//! through its `duplicate()`, so no two suites ever share an instance.
//! The one sanctioned exception is `shallow_copy_from`, which aliases
//! the source's instances instead of duplicating them.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::case::TestCase;

/// Suites created through the default-construction path, process-wide.
/// Copy construction does not count.
static TOTAL_SUITES_CREATED: AtomicU64 = AtomicU64::new(0);

#[derive(Debug)]
pub struct TestSuite {
    tests: Vec<Rc<dyn TestCase>>,
}

impl TestSuite {
    /// Empty suite. Bumps the process-wide creation counter by one;
    /// this is the only path that does.
    pub fn new() -> Self {
        TOTAL_SUITES_CREATED.fetch_add(1, Ordering::Relaxed);
        Self { tests: Vec::new() }
    }

    /// Appends a case; the suite owns it exclusively from here on.
    pub fn add_test<T: TestCase + 'static>(&mut self, test: T) {
        self.tests.push(Rc::new(test));
    }

    /// Read-only view of the owned cases, in insertion order.
    pub fn tests(&self) -> &[Rc<dyn TestCase>] {
        &self.tests
    }

    pub fn test_count(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Escape hatch: replaces this suite's sequence with shared handles
    /// to `other`'s instances. No duplication occurs: the two suites
    /// alias the same cases afterwards, and the deep-copy independence
    /// guarantee no longer holds between them. Use only when aliasing
    /// is intended; `clone`/`clone_from` are the default copy paths.
    pub fn shallow_copy_from(&mut self, other: &TestSuite) {
        self.tests = other.tests.clone();
    }

    /// Process-wide count of default-constructed suites.
    pub fn total_created() -> u64 {
        TOTAL_SUITES_CREATED.load(Ordering::Relaxed)
    }
}

impl Default for TestSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TestSuite {
    /// Deep copy: each element is re-created through `duplicate()`, so
    /// the copy and the original are pairwise independent. Does not
    /// touch the creation counter.
    fn clone(&self) -> Self {
        Self {
            tests: self.tests.iter().map(|t| t.duplicate()).collect(),
        }
    }

    /// Assignment: releases the current elements, then rebuilds from
    /// `source` with the same per-element duplication as `clone`.
    fn clone_from(&mut self, source: &Self) {
        self.tests.clear();
        self.tests.extend(source.tests.iter().map(|t| t.duplicate()));
    }
}
