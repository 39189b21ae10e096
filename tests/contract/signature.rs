//! Declared equality signatures.

use super::common::{Overloaded, TypedOnly};
use eqverify::testing::assert_violation;
use eqverify::{Category, Verifier};

#[test]
fn test_overload_next_to_universal_equality() {
    assert_violation(
        Verifier::for_type::<Overloaded>().verify(),
        Category::Signature,
        &[
            "More than one equals method found",
            "Signature should be: fn equals(&self, other: Option<&dyn Object>) -> bool",
        ],
    );
}

#[test]
fn test_typed_equality_only() {
    let message = assert_violation(
        Verifier::for_type::<TypedOnly>().verify(),
        Category::Signature,
        &["Parameter should be Option<&dyn Object>, not TypedOnly"],
    );
    assert!(message.starts_with("Overloaded:"));
}
