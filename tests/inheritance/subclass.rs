//! Trivial subclasses, redefined subclasses and sealing.

use super::common::{
    Account, ExactPoint, HalfSealedPoint, Ledger, OpenPoint, PlainLedger, Point, SavingsAccount,
    Unfinished, UnsealedPoint,
};
use eqverify::testing::{assert_infrastructure_error, assert_verifies, assert_violation};
use eqverify::{Category, Error, Verifier, Warning};

#[test]
fn test_open_class_with_sealed_methods() {
    assert_verifies(Verifier::for_type::<OpenPoint>().verify());
}

#[test]
fn test_equals_not_sealed() {
    assert_violation(
        Verifier::for_type::<UnsealedPoint>().verify(),
        Category::Subclass,
        &["equals is not sealed", "with_redefined_subclass"],
    );
}

#[test]
fn test_hash_not_sealed() {
    assert_violation(
        Verifier::for_type::<HalfSealedPoint>().verify(),
        Category::Subclass,
        &["hash is not sealed"],
    );
}

#[test]
fn test_strict_inheritance_suppressed() {
    assert_verifies(
        Verifier::for_type::<UnsealedPoint>()
            .suppress(&[Warning::StrictInheritance])
            .verify(),
    );
}

#[test]
fn test_exact_type_equality_needs_the_option() {
    assert_violation(
        Verifier::for_type::<ExactPoint>().verify(),
        Category::Subclass,
        &[
            "object is not equal to an instance of a trivial subclass with equal fields",
            "Maybe you forgot to call using_exact_type()",
        ],
    );
}

#[test]
fn test_exact_type_equality() {
    assert_verifies(Verifier::for_type::<ExactPoint>().using_exact_type().verify());
}

#[test]
fn test_exact_type_option_with_instanceof_equality() {
    assert_violation(
        Verifier::for_type::<OpenPoint>().using_exact_type().verify(),
        Category::Subclass,
        &["object is equal to an instance of a trivial subclass with equal fields"],
    );
}

#[test]
fn test_redefined_subclass() {
    assert_verifies(
        Verifier::for_type::<Account>()
            .with_redefined_subclass::<SavingsAccount>()
            .verify(),
    );
}

#[test]
fn test_redefined_subclass_with_sealed_equals() {
    assert_violation(
        Verifier::for_type::<Ledger>()
            .with_redefined_subclass::<PlainLedger>()
            .verify(),
        Category::Subclass,
        &["Ledger has a sealed equals method.\nNo need to supply a redefined subclass."],
    );
}

#[test]
fn test_redefined_subclass_must_extend() {
    let error = assert_infrastructure_error(
        Verifier::for_type::<Account>()
            .with_redefined_subclass::<Point>()
            .verify(),
        &["Redefined subclass Point does not extend Account."],
    );
    assert!(matches!(error, Error::Configuration(_)));
}

#[test]
fn test_open_class_without_stand_in() {
    let error = assert_infrastructure_error(
        Verifier::for_type::<Unfinished>().verify(),
        &["Cannot instantiate Unfinished", "no trivial subclass is registered"],
    );
    assert!(matches!(error, Error::Instantiation { .. }));
}

#[test]
fn test_exact_type_with_half_sealed_methods() {
    assert_violation(
        Verifier::for_type::<Ledger>().using_exact_type().verify(),
        Category::Finality,
        &["equals and hash must both be sealed or both be non-sealed."],
    );
}
