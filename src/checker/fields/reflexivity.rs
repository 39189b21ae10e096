// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! An identical copy equals the original, also with the field at its zero.

use crate::access::ObjectAccessor;
use crate::config::Warning;
use crate::error::{Category, Result};
use crate::formatter::show;
use crate::invoke;
use crate::model::FieldRef;

use super::super::{ensure, Context};

pub(super) fn check(
    ctx: &Context<'_>,
    field: FieldRef,
    reference: &mut ObjectAccessor,
    changed: &mut ObjectAccessor,
) -> Result<()> {
    if ctx.suppressed(Warning::IdenticalCopyForVersionedEntity) {
        return Ok(());
    }
    check_reflexivity_for(ctx, reference, changed)?;

    let nonnull = field.is_nonnull() && ctx.honours_markers();
    if !field.is_primitive() && (nonnull || ctx.suppressed(Warning::NullFields)) {
        return Ok(());
    }
    reference.field(field).default_field()?;
    changed.field(field).default_field()?;
    check_reflexivity_for(ctx, reference, changed)
}

fn check_reflexivity_for(
    ctx: &Context<'_>,
    reference: &ObjectAccessor,
    changed: &ObjectAccessor,
) -> Result<()> {
    let (left, right) = (reference.get(), changed.get());
    let equal = invoke::equals(left, right)?;
    if ctx.suppressed(Warning::IdenticalCopy) {
        ensure(!equal, Category::UnnecessarySuppression, || {
            format!("{}. Two identical copies are equal.", Warning::IdenticalCopy)
        })
    } else {
        ensure(equal, Category::Reflexivity, || {
            format!(
                "object does not equal an identical copy of itself:\n  {}\n\
                 If this is intentional, consider suppressing {}",
                show(left),
                Warning::IdenticalCopy
            )
        })
    }
}
