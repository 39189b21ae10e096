// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Equality and hash agree on which fields matter.
//!
//! Toggling a field must change both or neither. When every field must be
//! used, toggling must change equality for every field except the excepted
//! ones, and for none of those.

use crate::access::ObjectAccessor;
use crate::error::{Category, Result};
use crate::formatter::{show, show_hash};
use crate::invoke;
use crate::model::FieldRef;

use super::super::{ensure, Context};

pub(super) fn check(
    ctx: &Context<'_>,
    field: FieldRef,
    reference: &mut ObjectAccessor,
    changed: &mut ObjectAccessor,
) -> Result<()> {
    let name = field.name();
    let equal_to_itself = invoke::equals(reference.get(), changed.get())?;
    changed.field(field).change_field(ctx.prefabs())?;
    let (reference, changed) = (reference.get(), changed.get());

    let equals_changed = !invoke::equals(reference, changed)?;
    let hash_changed = invoke::hash_code(reference)? != invoke::hash_code(changed)?;
    if equals_changed != hash_changed {
        ensure(!equals_changed, Category::SignificantFields, || {
            format!(
                "equals relies on {}, but hash does not.\n  {} has hash {}\n  {} has hash {}",
                name,
                show(reference),
                show_hash(reference),
                show(changed),
                show_hash(changed)
            )
        })?;
        ensure(!hash_changed, Category::SignificantFields, || {
            format!(
                "hash relies on {}, but equals does not.\n\
                 These objects are equal, but probably shouldn't be:\n  {}\nand\n  {}",
                name,
                show(reference),
                show(changed)
            )
        })?;
    }

    if ctx.config.requires_all_fields() {
        let excepted = ctx.config.all_fields_should_be_used_except.contains(name);
        ensure(equal_to_itself, Category::SignificantFields, || {
            format!("equals does not use {}, or it is stateless.", name)
        })?;
        ensure(excepted || equals_changed, Category::SignificantFields, || {
            format!("equals does not use {}, or it is stateless.", name)
        })?;
        ensure(!excepted || !equals_changed, Category::SignificantFields, || {
            format!("equals should not use {}, but it does.", name)
        })?;
    }
    Ok(())
}
