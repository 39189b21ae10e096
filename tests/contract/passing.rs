//! Well-behaved types verify cleanly.

use super::common::{init_tracing, Cached, Color, Line, PartialPoint, Person, Pixel, Point};
use eqverify::testing::assert_verifies;
use eqverify::Verifier;

#[test]
fn test_point() {
    init_tracing();
    assert_verifies(Verifier::for_type::<Point>().verify());
}

#[test]
fn test_point_with_all_fields() {
    assert_verifies(
        Verifier::for_type::<Point>()
            .all_fields_should_be_used()
            .verify(),
    );
}

#[test]
fn test_optional_vec_and_enum_fields() {
    assert_verifies(Verifier::for_type::<Person>().verify());
}

#[test]
fn test_nested_records() {
    assert_verifies(Verifier::for_type::<Line>().verify());
}

#[test]
fn test_tuple_struct() {
    assert_verifies(
        Verifier::for_type::<Pixel>()
            .all_fields_should_be_used()
            .verify(),
    );
}

#[test]
fn test_skipped_field_is_invisible() {
    assert_verifies(
        Verifier::for_type::<Cached>()
            .all_fields_should_be_used()
            .verify(),
    );
}

#[test]
fn test_unused_field_is_fine_by_default() {
    assert_verifies(Verifier::for_type::<PartialPoint>().verify());
}

#[test]
fn test_enums_are_skipped() {
    assert_verifies(Verifier::for_type::<Color>().verify());
}
