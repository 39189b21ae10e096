//! Verification over generated examples.

use proptest::prelude::*;

use super::common::{Fraction, OrPoint, Point};
use eqverify::{Category, Verifier};

fn point_strategy() -> impl Strategy<Value = Point> {
    (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| Point { x, y })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Any two distinct points are valid unequal examples.
    #[test]
    fn prop_distinct_points_verify(a in point_strategy(), b in point_strategy()) {
        prop_assume!(a != b);
        prop_assert!(Verifier::for_examples(a, b, []).verify().is_ok());
    }

    /// Scaling a fraction gives a relaxed equal example.
    #[test]
    fn prop_scaled_fractions_are_relaxed_equal(
        numerator in 1i32..50,
        denominator in 1i32..50,
        factor in 2i32..10,
    ) {
        let result = Verifier::for_relaxed_equal_examples(
            Fraction::new(numerator, denominator),
            Fraction::new(numerator * factor, denominator * factor),
            [],
        )
        .and_unequal_example(Fraction::new(numerator + denominator, denominator))
        .verify();
        prop_assert!(result.is_ok(), "{:?}", result);
    }

    /// The defect is found no matter which examples are supplied.
    #[test]
    fn prop_or_equality_always_fails(x in 0i32..100, y in 100i32..200) {
        let result = Verifier::for_examples(
            OrPoint { x, y },
            OrPoint { x: x + 1000, y: y + 1000 },
            [],
        )
        .verify();
        let error = result.unwrap_err();
        prop_assert_eq!(error.category(), Some(Category::Transitivity));
    }
}
