//! `None` fields and `None` arguments.

use super::common::{Contact, Lenient, Tagline, VerifiedContact};
use eqverify::testing::{assert_verifies, assert_violation};
use eqverify::{Category, Error, ThrownKind, Verifier, Warning};

#[test]
fn test_unwrapping_optional_field() {
    assert_violation(
        Verifier::for_type::<Contact>().verify(),
        Category::NonNullity,
        &["equals panics with a null dereference on field email."],
    );
}

#[test]
fn test_violation_keeps_the_panic() {
    let error = Verifier::for_type::<Contact>().verify().unwrap_err();
    let Error::Violation(violation) = &error else {
        panic!("expected a violation, got {error}");
    };
    let cause = violation.cause().expect("panic is attached");
    assert_eq!(cause.kind(), ThrownKind::NullDereference);
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_null_fields_suppressed() {
    assert_verifies(
        Verifier::for_type::<Contact>()
            .suppress(&[Warning::NullFields])
            .verify(),
    );
}

#[test]
fn test_nonnull_marker_is_honoured() {
    assert_verifies(Verifier::for_type::<VerifiedContact>().verify());
}

#[test]
fn test_nonnull_marker_ignored_under_annotation_suppression() {
    assert_violation(
        Verifier::for_type::<VerifiedContact>()
            .suppress(&[Warning::Annotation])
            .verify(),
        Category::NonNullity,
        &["field email"],
    );
}

#[test]
fn test_equal_to_none() {
    assert_violation(
        Verifier::for_type::<Lenient>().verify(),
        Category::NonNullity,
        &["true returned for a `None` argument"],
    );
}

#[test]
fn test_other_panic_on_none_field() {
    let error = Verifier::for_type::<Tagline>().verify().unwrap_err();
    let Error::Violation(violation) = &error else {
        panic!("expected a violation, got {error}");
    };
    assert_eq!(violation.category(), Category::Panic);
    assert!(violation.message().contains("on field label"), "{}", violation.message());
    assert_eq!(violation.cause().map(|cause| cause.kind()), Some(ThrownKind::Other));
}
