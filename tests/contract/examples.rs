//! Caller-supplied examples.

use super::common::{Careless, Fraction, Point, RawFraction};
use eqverify::testing::{assert_verifies, assert_violation};
use eqverify::{Category, Verifier};

fn point(x: i32, y: i32) -> Point {
    Point { x, y }
}

#[test]
fn test_unequal_examples() {
    assert_verifies(Verifier::for_examples(point(1, 2), point(3, 4), []).verify());
    assert_verifies(Verifier::for_examples(point(1, 2), point(3, 4), [point(5, 6)]).verify());
}

#[test]
fn test_same_example_twice() {
    assert_violation(
        Verifier::for_examples(point(1, 2), point(1, 2), []).verify(),
        Category::Precondition,
        &["the same object appears twice"],
    );
}

#[test]
fn test_unequal_examples_that_are_equal() {
    assert_violation(
        Verifier::for_examples(Fraction::new(1, 2), Fraction::new(2, 4), []).verify(),
        Category::Precondition,
        &["two objects are equal to each other"],
    );
}

#[test]
fn test_relaxed_equal_examples() {
    assert_verifies(
        Verifier::for_relaxed_equal_examples(Fraction::new(1, 2), Fraction::new(2, 4), [])
            .and_unequal_example(Fraction::new(1, 3))
            .verify(),
    );
    assert_verifies(
        Verifier::for_relaxed_equal_examples(
            Fraction::new(1, 2),
            Fraction::new(2, 4),
            [Fraction::new(-3, -6)],
        )
        .and_unequal_examples(Fraction::new(1, 3), [Fraction::new(3, 4)])
        .verify(),
    );
}

#[test]
fn test_relaxed_examples_that_differ() {
    assert_violation(
        Verifier::for_relaxed_equal_examples(Fraction::new(1, 2), Fraction::new(1, 3), [])
            .and_unequal_example(Fraction::new(1, 4))
            .verify(),
        Category::Precondition,
        &["not all equal objects are equal"],
    );
}

#[test]
fn test_relaxed_examples_that_are_identical() {
    assert_violation(
        Verifier::for_relaxed_equal_examples(Fraction::new(1, 2), Fraction::new(1, 2), [])
            .and_unequal_example(Fraction::new(1, 4))
            .verify(),
        Category::Precondition,
        &["two identical objects appear"],
    );
}

#[test]
fn test_example_in_both_groups() {
    assert_violation(
        Verifier::for_relaxed_equal_examples(Fraction::new(1, 2), Fraction::new(2, 4), [])
            .and_unequal_example(Fraction::new(2, 4))
            .verify(),
        Category::Precondition,
        &["the same object appears in both the equal and unequal examples"],
    );
}

#[test]
fn test_equal_examples_with_different_hashes() {
    assert_violation(
        Verifier::for_relaxed_equal_examples(RawFraction::new(1, 2), RawFraction::new(2, 4), [])
            .and_unequal_example(RawFraction::new(1, 3))
            .verify(),
        Category::HashCode,
        &["hash codes should be equal"],
    );
}

#[test]
fn test_equality_panics_on_unrelated_type() {
    let message = assert_violation(
        Verifier::for_type::<Careless>().verify(),
        Category::TypeCheck,
        &["on an unrelated type", "downcast_ref"],
    );
    assert!(message.contains("a Careless"));
}
