// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Equality across the class hierarchy.
//!
//! - Superclass: a superclass-typed copy is symmetric, transitive and
//!   hash-consistent with the instance, or never equal when equality is
//!   redefined.
//! - Trivial subclass: equal unless equality is exact-type.
//! - Redefined subclass: never equal.
//! - Sealing: equality and hash are sealed, unless a redefined subclass
//!   explains why they cannot be.

use crate::access::{copy_as, ObjectAccessor};
use crate::config::Warning;
use crate::error::{Category, Result, Violation};
use crate::formatter::{show, show_hash};
use crate::invoke;

use super::{ensure, Context};

pub(crate) fn check(ctx: &Context<'_>) -> Result<()> {
    check_superclass(ctx)?;
    check_subclass(ctx)?;
    check_redefined_subclass(ctx)?;
    if !ctx.suppressed(Warning::StrictInheritance) {
        check_sealed_methods(ctx)?;
    }
    Ok(())
}

fn check_superclass(ctx: &Context<'_>) -> Result<()> {
    let Some(superclass) = ctx.class().superclass() else {
        return Ok(());
    };
    if superclass.is_equals_inherited_from_root() {
        return Ok(());
    }
    let reference = ctx.accessor.red_accessor()?;
    let equal_super = copy_as(reference.get(), superclass)?;
    let (reference_object, equal_super) = (reference.get(), &*equal_super);

    if ctx.config.redefined_superclass || ctx.config.using_exact_type {
        let equal = invoke::equals(reference_object, equal_super)?
            || invoke::equals(equal_super, reference_object)?;
        return ensure(!equal, Category::RedefinedSuperclass, || {
            format!(
                "\n  {}\nshould not equal superclass instance\n  {}\nbut it does.",
                show(reference_object),
                show(equal_super)
            )
        });
    }

    let symmetric = invoke::equals(reference_object, equal_super)?
        && invoke::equals(equal_super, reference_object)?;
    ensure(symmetric, Category::Symmetry, || {
        format!(
            "\n  {}\ndoes not equal superclass instance\n  {}",
            show(reference_object),
            show(equal_super)
        )
    })?;

    let mut shallow = reference.copy()?;
    shallow.shallow_scramble(ctx.prefabs())?;
    let shallow = shallow.get();
    let transitive = invoke::equals(reference_object, shallow)?
        || !invoke::equals(equal_super, shallow)?;
    ensure(transitive, Category::Transitivity, || {
        format!(
            "\n  {}\nand\n  {}\nboth equal superclass instance\n  {}\nwhich implies they equal each other.",
            show(reference_object),
            show(shallow),
            show(equal_super)
        )
    })?;

    let same_hash = invoke::hash_code(reference_object)? == invoke::hash_code(equal_super)?;
    ensure(same_hash, Category::Superclass, || {
        format!(
            "hash for\n  {} ({})\nshould be equal to hash for superclass instance\n  {} ({})",
            show(reference_object),
            show_hash(reference_object),
            show(equal_super),
            show_hash(equal_super)
        )
    })
}

fn check_subclass(ctx: &Context<'_>) -> Result<()> {
    let class = ctx.class();
    if class.is_sealed() || ctx.redefined_subclass.is_some() {
        return Ok(());
    }
    let reference = ctx.accessor.red_accessor()?;
    let equal_sub = reference.copy_into_anonymous_subclass()?;
    let equal = invoke::equals(reference.get(), equal_sub.get())?;
    if ctx.config.using_exact_type {
        ensure(!equal, Category::Subclass, || {
            format!(
                "object is equal to an instance of a trivial subclass with equal fields:\n  {}\n\
                 This should not happen with exact-type equality.",
                show(reference.get())
            )
        })
    } else {
        ensure(equal, Category::Subclass, || {
            format!(
                "object is not equal to an instance of a trivial subclass with equal fields:\n  {}\n\
                 Maybe you forgot to call using_exact_type(). Otherwise, consider not marking the class open.",
                show(reference.get())
            )
        })
    }
}

fn check_redefined_subclass(ctx: &Context<'_>) -> Result<()> {
    let class = ctx.class();
    let Some(subclass) = ctx.redefined_subclass else {
        return Ok(());
    };
    if class.is_sealed() {
        return Ok(());
    }
    if class.is_equals_sealed() {
        return Err(Violation::new(
            Category::Subclass,
            format!(
                "{} has a sealed equals method.\nNo need to supply a redefined subclass.",
                class.name()
            ),
        )
        .into());
    }
    let reference: ObjectAccessor = ctx.accessor.red_accessor()?;
    let redefined = reference.copy_into_subclass(subclass)?;
    let equal = invoke::equals(reference.get(), redefined.get())?;
    ensure(!equal, Category::Subclass, || {
        format!(
            "\n  {}\nequals subclass instance\n  {}",
            show(reference.get()),
            show(redefined.get())
        )
    })
}

fn check_sealed_methods(ctx: &Context<'_>) -> Result<()> {
    let class = ctx.class();
    if class.is_sealed() || ctx.redefined_subclass.is_some() {
        return Ok(());
    }
    let equals_sealed = class.is_equals_sealed();
    let hash_sealed = class.is_hash_sealed();
    if ctx.config.using_exact_type {
        return ensure(equals_sealed == hash_sealed, Category::Finality, || {
            String::from("equals and hash must both be sealed or both be non-sealed.")
        });
    }
    ensure(equals_sealed, Category::Subclass, || {
        String::from(
            "equals is not sealed.\nSupply an instance of a redefined subclass using \
             with_redefined_subclass if equals cannot be sealed.",
        )
    })?;
    ensure(hash_sealed, Category::Subclass, || {
        String::from(
            "hash is not sealed.\nSupply an instance of a redefined subclass using \
             with_redefined_subclass if hash cannot be sealed.",
        )
    })
}
