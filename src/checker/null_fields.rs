// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `None` in a field must not make equality or hash panic.

use crate::access::ObjectAccessor;
use crate::config::Warning;
use crate::error::{Category, Result, Violation};
use crate::invoke::{catching, ThrownKind};
use crate::model::{self, FieldRef};

use super::inspector::FieldInspector;
use super::Context;

pub(crate) fn check(ctx: &Context<'_>) -> Result<()> {
    if ctx.suppressed(Warning::NullFields) {
        return Ok(());
    }
    FieldInspector::new(ctx).check(false, |field, reference, changed| {
        if field.is_primitive() || (field.is_nonnull() && ctx.honours_markers()) {
            return Ok(());
        }
        changed.field(field).default_field()?;
        handle_all(field, reference, changed)?;
        reference.field(field).default_field()?;
        handle_all(field, reference, changed)
    })
}

fn handle_all(field: FieldRef, reference: &ObjectAccessor, changed: &ObjectAccessor) -> Result<()> {
    let (reference, changed) = (reference.get(), changed.get());
    handle("equals", field, || {
        model::equals(reference, Some(changed));
    })?;
    handle("equals", field, || {
        model::equals(changed, Some(reference));
    })?;
    handle("hash", field, || {
        model::hash_code(reference);
    })?;
    handle("hash", field, || {
        model::hash_code(changed);
    })
}

fn handle(method: &str, field: FieldRef, call: impl FnOnce()) -> Result<()> {
    let Err(thrown) = catching(call) else {
        return Ok(());
    };
    let violation = match thrown.kind() {
        ThrownKind::NullDereference => Violation::new(
            Category::NonNullity,
            format!(
                "{} panics with a null dereference on field {}.",
                method,
                field.name()
            ),
        ),
        _ => Violation::new(
            Category::Panic,
            format!("{} panics with {} on field {}.", method, thrown, field.name()),
        ),
    };
    Err(violation.with_cause(thrown).into())
}

