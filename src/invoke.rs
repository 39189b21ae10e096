// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Running code of the inspected type without letting it take the verifier down.
//!
//! Panics play the role exceptions play elsewhere: an equality body that
//! unwraps a `None` field, an abstract method that was never implemented, a
//! `Debug` impl that blows up. Every call into user code goes through
//! [`catching`], which turns the unwind into a [`Thrown`] value.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::error::{Category, Error, Result, Violation};
use crate::formatter::show;
use crate::model::{self, Object};

/// Payload prefix used when an abstract method slot is invoked.
pub(crate) const ABSTRACT_METHOD: &str = "abstract method";

/// Marker std puts in the message of `Option::unwrap` on `None`.
const NONE_UNWRAP: &str = "on a `None` value";

/// Payload prefixes of `todo!()` and `unimplemented!()`.
const TODO: &str = "not yet implemented";
const UNIMPLEMENTED: &str = "not implemented";

/// Rough classification of a captured panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrownKind {
    /// `unwrap()` on a `None`: the closest thing to a null dereference.
    NullDereference,
    /// An abstract equality or hash slot was called.
    AbstractMethod,
    Other,
}

/// A panic captured while running inspected code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct Thrown {
    kind: ThrownKind,
    message: String,
}

impl Thrown {
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            String::from("non-string panic payload")
        };
        let kind = if message.contains(NONE_UNWRAP) {
            ThrownKind::NullDereference
        } else if message.starts_with(ABSTRACT_METHOD)
            || message.starts_with(TODO)
            || message.starts_with(UNIMPLEMENTED)
        {
            ThrownKind::AbstractMethod
        } else {
            ThrownKind::Other
        };
        Thrown { kind, message }
    }

    pub fn kind(&self) -> ThrownKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Short name of the failure, in the spirit of an exception class name.
    pub fn name(&self) -> &'static str {
        match self.kind {
            ThrownKind::NullDereference => "NullDereference",
            ThrownKind::AbstractMethod => "AbstractMethodError",
            ThrownKind::Other => "Panic",
        }
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.name(), self.message)
    }
}

/// Run `f`, capturing a panic as [`Thrown`].
pub fn catching<R>(f: impl FnOnce() -> R) -> Result<R, Thrown> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(Thrown::from_payload)
}

// ============================================================================
// GUARDED DISPATCH
// ============================================================================
//
// Checks compare objects constantly. A panic that no check anticipated is
// still a defect of the inspected type, so it is reported as a violation.

fn unexpected(method: &str, receiver: &dyn Object, thrown: Thrown) -> Error {
    Violation::new(
        Category::Panic,
        format!(
            "{}::{} panicked with {} on\n  {}",
            receiver.class().name(),
            method,
            thrown,
            show(receiver)
        ),
    )
    .with_cause(thrown)
    .into()
}

/// `a.equals(b)` with panics reported as a violation.
pub(crate) fn equals(a: &dyn Object, b: &dyn Object) -> Result<bool> {
    catching(|| model::equals(a, Some(b))).map_err(|thrown| unexpected("equals", a, thrown))
}

/// `a.hash()` with panics reported as a violation.
pub(crate) fn hash_code(a: &dyn Object) -> Result<u64> {
    catching(|| model::hash_code(a)).map_err(|thrown| unexpected("hash", a, thrown))
}
