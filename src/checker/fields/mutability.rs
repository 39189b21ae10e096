// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Equality may only depend on fields that cannot change.

use crate::access::ObjectAccessor;
use crate::error::{Category, Result};
use crate::invoke;
use crate::model::FieldRef;

use super::super::{ensure, Context};

pub(super) fn check(
    ctx: &Context<'_>,
    field: FieldRef,
    reference: &mut ObjectAccessor,
    changed: &mut ObjectAccessor,
) -> Result<()> {
    let equal_before = invoke::equals(reference.get(), changed.get())?;
    changed.field(field).change_field(ctx.prefabs())?;
    let equal_after = invoke::equals(reference.get(), changed.get())?;
    let depends = equal_before && !equal_after;
    ensure(!depends || field.is_readonly(), Category::Mutability, || {
        format!("equals depends on mutable field {}.", field.name())
    })
}
