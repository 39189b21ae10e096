// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two equal pairs out of three imply the third.
//!
//! With `a1` the reference, `b1` is `a1` with this field toggled and `b2` is
//! `a1` with every field toggled. Exactly one unequal pair among
//! `(a1, b1)`, `(b1, b2)`, `(a1, b2)` means equality combines fields with
//! "or" somewhere.

use crate::access::ObjectAccessor;
use crate::error::{Category, Result};
use crate::formatter::show;
use crate::invoke;
use crate::model::{field, FieldRef};

use super::super::{ensure, Context};

pub(super) fn check(
    ctx: &Context<'_>,
    field: FieldRef,
    reference: &mut ObjectAccessor,
    changed: &mut ObjectAccessor,
) -> Result<()> {
    let prefabs = ctx.prefabs();
    changed.field(field).change_field(prefabs)?;

    let mut b2 = reference.copy()?;
    b2.field(field).change_field(prefabs)?;
    for other in field::enumerate(ctx.class()) {
        if other != field {
            b2.field(other).change_field(prefabs)?;
        }
    }

    let (a1, b1, b2) = (reference.get(), changed.get(), b2.get());
    let results = [
        invoke::equals(a1, b1)?,
        invoke::equals(b1, b2)?,
        invoke::equals(a1, b2)?,
    ];
    let falses = results.iter().filter(|equal| !**equal).count();
    ensure(falses != 1, Category::Transitivity, || {
        format!(
            "two of these three instances are equal to each other, so the third one should be, too:\n- {}\n- {}\n- {}",
            show(a1),
            show(b1),
            show(b2)
        )
    })
}
