// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contract properties over the examples themselves.
//!
//! Every example must equal itself, reject `None` and unrelated types, and
//! hash like a field-wise copy of itself. Equal examples must be symmetric
//! and share a hash. Unequal examples must actually be unequal, unless the
//! type has no state to tell them apart.

use crate::access::copy_as;
use crate::error::{Category, Result, Violation};
use crate::formatter::{show, show_hash};
use crate::invoke::{self, catching};
use crate::model::{self, field, ClassBuilder, Inspect, Object};

use super::{ensure, Context};

/// A type no inspected type should consider itself equal to.
#[derive(Debug, Clone)]
struct SomethingElse;

impl Inspect for SomethingElse {
    fn describe(_: &mut ClassBuilder<Self>) {}
}

pub(crate) fn check(ctx: &Context<'_>) -> Result<()> {
    for example in ctx.all_examples() {
        check_single(ctx, &**example)?;
    }
    for (i, a) in ctx.equal_examples.iter().enumerate() {
        for b in &ctx.equal_examples[i + 1..] {
            check_double(&**a, &**b)?;
        }
    }
    for (i, a) in ctx.unequal_examples.iter().enumerate() {
        for b in &ctx.unequal_examples[i + 1..] {
            if is_identical(ctx, &**a, &**b)? {
                continue;
            }
            check_unequal(&**a, &**b)?;
        }
    }
    for a in &ctx.equal_examples {
        for b in &ctx.unequal_examples {
            check_unequal(&**a, &**b)?;
        }
    }
    Ok(())
}

fn check_single(ctx: &Context<'_>, reference: &dyn Object) -> Result<()> {
    let copy = copy_as(reference, ctx.class())?;
    ensure(invoke::equals(reference, reference)?, Category::Reflexivity, || {
        format!("object does not equal itself:\n  {}", show(reference))
    })?;
    check_non_nullity(reference)?;
    check_type_check(reference)?;
    check_hash(reference, &*copy)
}

fn check_non_nullity(reference: &dyn Object) -> Result<()> {
    match catching(|| model::equals(reference, None)) {
        Ok(false) => Ok(()),
        Ok(true) => Err(Violation::new(
            Category::NonNullity,
            format!("true returned for a `None` argument:\n  {}", show(reference)),
        )
        .into()),
        Err(thrown) => Err(Violation::new(
            Category::NonNullity,
            format!("equals panics on a `None` argument: {}", thrown),
        )
        .with_cause(thrown)
        .into()),
    }
}

fn check_type_check(reference: &dyn Object) -> Result<()> {
    let unrelated = SomethingElse;
    match catching(|| model::equals(reference, Some(&unrelated))) {
        Ok(false) => Ok(()),
        Ok(true) => Err(Violation::new(
            Category::TypeCheck,
            format!("equals returns true for an unrelated type:\n  {}", show(reference)),
        )
        .into()),
        Err(thrown) => Err(Violation::new(
            Category::TypeCheck,
            format!(
                "equals panics with {} on an unrelated type.\nCheck the type with `downcast_ref` or `upcast_ref` before comparing fields.",
                thrown
            ),
        )
        .with_cause(thrown)
        .into()),
    }
}

fn check_hash(reference: &dyn Object, other: &dyn Object) -> Result<()> {
    if !invoke::equals(reference, other)? {
        return Ok(());
    }
    let holds = invoke::hash_code(reference)? == invoke::hash_code(other)?;
    ensure(holds, Category::HashCode, || {
        format!(
            "hash codes should be equal:\n  {} ({})\nand\n  {} ({})",
            show(reference),
            show_hash(reference),
            show(other),
            show_hash(other)
        )
    })
}

fn check_double(a: &dyn Object, b: &dyn Object) -> Result<()> {
    let holds = invoke::equals(a, b)? == invoke::equals(b, a)?;
    ensure(holds, Category::Symmetry, || {
        format!("objects are not symmetric:\n  {}\nand\n  {}", show(a), show(b))
    })?;
    check_hash(a, b)
}

fn check_unequal(a: &dyn Object, b: &dyn Object) -> Result<()> {
    ensure(!invoke::equals(a, b)?, Category::Precondition, || {
        format!(
            "two objects are equal to each other:\n  {}\nand\n  {}",
            show(a),
            show(b)
        )
    })
}

/// Every field of `a` equals the same field of `b`; trivially true without fields.
pub(super) fn is_identical(ctx: &Context<'_>, a: &dyn Object, b: &dyn Object) -> Result<bool> {
    for field in field::enumerate(ctx.class()) {
        match (field.get(a), field.get(b)) {
            (Some(left), Some(right)) => {
                if !invoke::equals(left, right)? {
                    return Ok(false);
                }
            }
            _ => return Ok(false),
        }
    }
    Ok(true)
}
