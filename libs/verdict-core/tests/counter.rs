//! Creation-counter discipline.
//!
//! Kept as the single test in its own binary: the counter is
//! process-wide, and sibling tests constructing suites in parallel
//! would make exact-delta assertions unreliable.

use verdict_core::{BasicTestCase, TestSuite};

#[test]
fn only_default_construction_bumps_the_counter() {
    let before = TestSuite::total_created();

    let mut suites: Vec<TestSuite> = (0..4).map(|_| TestSuite::new()).collect();
    assert_eq!(TestSuite::total_created(), before + 4);

    let _defaulted = TestSuite::default();
    assert_eq!(TestSuite::total_created(), before + 5);

    suites[0].add_test(BasicTestCase::new("input1", "input1"));
    suites[0].add_test(BasicTestCase::new("input2", "expected2"));

    // Copy construction never counts, however many copies are made.
    let copies: Vec<TestSuite> = (0..3).map(|_| suites[0].clone()).collect();
    assert_eq!(copies[2].test_count(), 2);
    assert_eq!(TestSuite::total_created(), before + 5);

    // Neither does assignment into an existing suite...
    let source_for_clone = suites[0].clone();
    suites[1].clone_from(&source_for_clone);
    assert_eq!(suites[1].test_count(), 2);
    assert_eq!(TestSuite::total_created(), before + 5);

    // ...nor the shallow-copy escape hatch.
    let source_for_shallow = suites[0].clone();
    suites[2].shallow_copy_from(&source_for_shallow);
    assert_eq!(TestSuite::total_created(), before + 5);

    // Dropping suites never decrements.
    drop(copies);
    drop(suites);
    assert_eq!(TestSuite::total_created(), before + 5);
}
