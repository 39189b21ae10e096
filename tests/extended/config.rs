//! Options loaded from JSON.

use super::common::{Counter, PartialPoint, Point};
use eqverify::testing::{assert_infrastructure_error, assert_verifies, assert_violation};
use eqverify::{Category, Error, Verifier, VerifierConfig, Warning};

#[test]
fn test_suppression_from_json() {
    let config = VerifierConfig::from_json(r#"{"suppress": ["nonfinal-fields"]}"#).unwrap();
    assert!(config.is_suppressed(Warning::NonfinalFields));
    assert_verifies(Verifier::for_type::<Counter>().with_config(config).verify());
}

#[test]
fn test_excepted_fields_from_json() {
    let config =
        VerifierConfig::from_json(r#"{"allFieldsShouldBeUsedExcept": ["y"]}"#).unwrap();
    assert_verifies(
        Verifier::for_type::<PartialPoint>()
            .with_config(config)
            .verify(),
    );
}

#[test]
fn test_config_merges_with_builder_options() {
    let config = VerifierConfig::from_json(r#"{"allFieldsShouldBeUsed": true}"#).unwrap();
    assert_violation(
        Verifier::for_type::<PartialPoint>()
            .suppress(&[Warning::NullFields])
            .with_config(config)
            .verify(),
        Category::SignificantFields,
        &["equals does not use y"],
    );
}

#[test]
fn test_unknown_field_in_config() {
    let config =
        VerifierConfig::from_json(r#"{"allFieldsShouldBeUsedExcept": ["w"]}"#).unwrap();
    assert_infrastructure_error(
        Verifier::for_type::<Point>().with_config(config).verify(),
        &["does not contain field w"],
    );
}

#[test]
fn test_malformed_json() {
    let error = VerifierConfig::from_json("{suppress").unwrap_err();
    assert!(matches!(error, Error::Json(_)));
    assert!(!error.is_violation());
}
