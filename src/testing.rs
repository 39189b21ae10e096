// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Assertion helpers for tests of types and of the verifier itself.
//!
//! ```ignore
//! let result = Verifier::for_type::<OrPoint>().verify();
//! assert_violation(result, Category::Transitivity, &["two of these three"]);
//! ```

use crate::error::{Category, Error, Result};

/// Panic with the full message unless `result` passed.
#[track_caller]
pub fn assert_verifies(result: Result<()>) {
    if let Err(error) = result {
        panic!("expected verification to pass, but it failed:\n{}", error);
    }
}

/// Panic unless `result` is a violation of `category` whose message contains
/// every fragment. Returns the message for further assertions.
#[track_caller]
pub fn assert_violation(result: Result<()>, category: Category, fragments: &[&str]) -> String {
    let error = match result {
        Ok(()) => panic!("expected a {} violation, but verification passed", category),
        Err(error) => error,
    };
    match &error {
        Error::Violation(violation) => {
            assert_eq!(
                violation.category(),
                category,
                "wrong category for violation:\n{}",
                violation
            );
        }
        other => panic!(
            "expected a {} violation, got an infrastructure error:\n{}",
            category, other
        ),
    }
    assert_contains(&error, fragments);
    error.to_string()
}

/// Panic unless `result` is an infrastructure error mentioning every fragment.
#[track_caller]
pub fn assert_infrastructure_error(result: Result<()>, fragments: &[&str]) -> Error {
    let error = match result {
        Ok(()) => panic!("expected an infrastructure error, but verification passed"),
        Err(error) => error,
    };
    assert!(
        !error.is_violation(),
        "expected an infrastructure error, got a violation:\n{}",
        error
    );
    assert_contains(&error, fragments);
    error
}

#[track_caller]
fn assert_contains(error: &Error, fragments: &[&str]) {
    let message = error.to_string();
    for fragment in fragments {
        assert!(
            message.contains(fragment),
            "message does not contain {:?}:\n{}",
            fragment,
            message
        );
    }
}
