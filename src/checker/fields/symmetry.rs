// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::access::ObjectAccessor;
use crate::error::{Category, Result};
use crate::formatter::show;
use crate::invoke;
use crate::model::FieldRef;

use super::super::{ensure, Context};

/// `a == b` iff `b == a`, with neither, one and both sides toggled.
pub(super) fn check(
    ctx: &Context<'_>,
    field: FieldRef,
    reference: &mut ObjectAccessor,
    changed: &mut ObjectAccessor,
) -> Result<()> {
    check_symmetry(reference, changed)?;
    changed.field(field).change_field(ctx.prefabs())?;
    check_symmetry(reference, changed)?;
    reference.field(field).change_field(ctx.prefabs())?;
    check_symmetry(reference, changed)
}

fn check_symmetry(reference: &ObjectAccessor, changed: &ObjectAccessor) -> Result<()> {
    let (left, right) = (reference.get(), changed.get());
    let holds = invoke::equals(left, right)? == invoke::equals(right, left)?;
    ensure(holds, Category::Symmetry, || {
        format!(
            "objects are not symmetric:\n  {}\nand\n  {}",
            show(left),
            show(right)
        )
    })
}
