// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `Vec` fields compare element-wise: a fresh structural copy stays equal.

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
    let Kind::Array(wrapper) = field.class().kind() else {
        return Ok(());
    };
    let copy = changed.field(field).get()?.clone_object();
    changed.field(field).set(copy)?;

    let (reference, changed) = (reference.get(), changed.get());
    let name = field.name();
    let nested = matches!(wrapper.inner().kind(), Kind::Array(_));
    let equal = invoke::equals(reference, changed)?;
    let same_hash = invoke::hash_code(reference)? == invoke::hash_code(changed)?;
    if nested {
        ensure(equal, Category::MultidimensionalArray, || {
            format!("shallow comparison used instead of a deep comparison for field {}.", name)
        })?;
        ensure(same_hash, Category::MultidimensionalArray, || {
            format!("shallow hash used instead of a deep hash for field {}.", name)
        })
    } else {
        ensure(equal, Category::Array, || {
            format!(
                "identity comparison used instead of an element-wise comparison for field {}.",
                name
            )
        })?;
        ensure(same_hash, Category::Array, || {
            format!("identity hash used instead of an element-wise hash for field {}.", name)
        })
    }
}
