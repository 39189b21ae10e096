// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Float fields compare NaN-aware: two NaNs in the same field stay equal.

use crate::access::ObjectAccessor;
use crate::error::{Category, Result};
use crate::invoke;
use crate::model::{FieldRef, Kind};

use super::super::ensure;

pub(super) fn check(
    field: FieldRef,
    reference: &mut ObjectAccessor,
    changed: &mut ObjectAccessor,
) -> Result<()> {
    let Kind::Float { nan, .. } = field.class().kind() else {
        return Ok(());
    };
    reference.field(field).set(nan())?;
    changed.field(field).set(nan())?;
    let equal = invoke::equals(reference.get(), changed.get())?;
    ensure(equal, Category::Float, || {
        format!(
            "equals doesn't use a NaN-aware comparison (to_bits or total_cmp) for field {}.",
            field.name()
        )
    })
}
