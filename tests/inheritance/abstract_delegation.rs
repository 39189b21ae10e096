//! Equality and hash that end up in an abstract slot.

use super::common::{Brittle, Draft, Framed, Gallery, HalfAbstract, Shape, Sketch, Square};
use eqverify::testing::assert_violation;
use eqverify::{Category, Error, Thrown, ThrownKind, Verifier};

#[test]
fn test_both_methods_abstract() {
    assert_violation(
        Verifier::for_type::<Shape>().verify(),
        Category::AbstractDelegation,
        &["Shape's equals and hash methods are both abstract. They should be concrete."],
    );
}

#[test]
fn test_only_equals_abstract() {
    assert_violation(
        Verifier::for_type::<HalfAbstract>().verify(),
        Category::AbstractDelegation,
        &["HalfAbstract's equals method is abstract, but hash is not.\nBoth should be concrete."],
    );
}

#[test]
fn test_call_into_abstract_superclass() {
    assert_violation(
        Verifier::for_type::<Square>().verify(),
        Category::AbstractDelegation,
        &[
            "Square's equals method delegates to an abstract method",
            "Shape::equals",
        ],
    );
}

#[test]
fn test_field_with_abstract_equality() {
    let message = assert_violation(
        Verifier::for_type::<Framed>().verify(),
        Category::AbstractDelegation,
        &["Shape's equals method delegates to an abstract method"],
    );
    assert!(message.ends_with("Add prefab values for Shape."));
}

#[test]
fn test_todo_hash_is_abstract_delegation() {
    let result = Verifier::for_type::<Draft>().verify();
    assert_violation(
        result,
        Category::AbstractDelegation,
        &["Draft's hash method delegates to an abstract method", "not yet implemented"],
    );
}

#[test]
fn test_unimplemented_equals_is_abstract_delegation() {
    let error = Verifier::for_type::<Sketch>().verify().unwrap_err();
    let Error::Violation(violation) = &error else {
        panic!("expected a violation, got {error}");
    };
    assert_eq!(violation.category(), Category::AbstractDelegation);
    assert_eq!(
        violation.cause().map(Thrown::kind),
        Some(ThrownKind::AbstractMethod)
    );
    assert!(violation.message().contains("not implemented: Sketch::equals"));
}

#[test]
fn test_any_panic_is_reported_at_delegation() {
    let error = Verifier::for_type::<Brittle>().verify().unwrap_err();
    let Error::Violation(violation) = &error else {
        panic!("expected a violation, got {error}");
    };
    assert_eq!(violation.category(), Category::AbstractDelegation);
    assert_eq!(violation.cause().map(Thrown::kind), Some(ThrownKind::Other));
    assert!(violation.message().contains("comparison is not supported"));
}

#[test]
fn test_abstract_element_type_inside_vec() {
    let message = assert_violation(
        Verifier::for_type::<Gallery>().verify(),
        Category::AbstractDelegation,
        &["Shape's equals method delegates to an abstract method"],
    );
    assert!(message.ends_with("Add prefab values for Shape."));
}
