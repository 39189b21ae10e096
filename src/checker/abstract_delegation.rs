// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Equality and hash must not end up in an abstract slot.
//!
//! Looked at in this order: the class's own slots, the values of every
//! field, the red and black instances, and the superclass.

use crate::access::ClassAccessor;
use crate::error::{Category, Error, Result, Violation};
use crate::invoke::{catching, Thrown};
use crate::model::{self, field, Class, Kind, Object};

use super::Context;

pub(crate) fn check(ctx: &Context<'_>) -> Result<()> {
    let class = ctx.class();
    check_own_slots(class)?;
    check_fields(ctx)?;
    let red = ctx.accessor.red_object()?;
    let black = ctx.accessor.black_object()?;
    check_methods(class, &*red, &*black, false)?;
    check_superclass(ctx)
}

fn check_own_slots(class: &'static Class) -> Result<()> {
    match (class.is_equals_abstract(), class.is_hash_abstract()) {
        (true, true) => Err(Violation::new(
            Category::AbstractDelegation,
            format!(
                "{}'s equals and hash methods are both abstract. They should be concrete.",
                class.name()
            ),
        )
        .into()),
        (true, false) => Err(single_abstract(class, true, true)),
        (false, true) => Err(single_abstract(class, false, true)),
        (false, false) => Ok(()),
    }
}

fn check_fields(ctx: &Context<'_>) -> Result<()> {
    let prefabs = ctx.prefabs();
    for field in field::enumerate(ctx.class()) {
        let class = element_class(field.class());
        if !matches!(class.kind(), Kind::Record) {
            continue;
        }
        // Derivation problems surface with better context in later stages.
        if prefabs.put_for(class).is_err() {
            continue;
        }
        let (Some(red), Some(black)) = (prefabs.red(class), prefabs.black(class)) else {
            continue;
        };
        check_methods(class, &*red, &*black, true)?;
    }
    Ok(())
}

/// The record inside `Option`, `Box` and `Vec` layers, or `class` itself.
fn element_class(mut class: &'static Class) -> &'static Class {
    while let Kind::Nullable(wrapper) | Kind::Boxed(wrapper) | Kind::Array(wrapper) = class.kind() {
        class = wrapper.inner();
    }
    class
}

fn check_superclass(ctx: &Context<'_>) -> Result<()> {
    let Some(superclass) = ctx.accessor.superclass_accessor() else {
        return Ok(());
    };
    let class = superclass.class();
    let equals_abstract = class.is_equals_abstract();
    let hash_abstract = class.is_hash_abstract();
    if equals_abstract != hash_abstract {
        return Err(single_abstract(class, equals_abstract, false));
    }
    if equals_abstract || (class.is_abstract() && class.trivial_subclass().is_none()) {
        return Ok(());
    }
    check_super_instances(superclass)
}

fn check_super_instances(superclass: ClassAccessor<'_>) -> Result<()> {
    let red = superclass.red_object()?;
    let black = superclass.black_object()?;
    check_methods(superclass.class(), &*red, &*black, false)
}

/// Invoke equality and hash; any panic at this point is reported.
fn check_methods(
    class: &'static Class,
    instance: &dyn Object,
    other: &dyn Object,
    prefab_possible: bool,
) -> Result<()> {
    if let Err(thrown) = catching(|| model::equals(instance, Some(other))) {
        delegation(class, "equals", thrown, prefab_possible)?;
    }
    if let Err(thrown) = catching(|| model::hash_code(instance)) {
        delegation(class, "hash", thrown, prefab_possible)?;
    }
    Ok(())
}

fn delegation(class: &Class, method: &str, thrown: Thrown, prefab_possible: bool) -> Result<()> {
    let hint = if prefab_possible {
        format!("\nAdd prefab values for {}.", class.name())
    } else {
        String::new()
    };
    let detail = format!(
        "{}'s {} method delegates to an abstract method:\n {}{}",
        class.name(),
        method,
        thrown.message(),
        hint
    );
    Err(Violation::new(Category::AbstractDelegation, detail)
        .with_cause(thrown)
        .into())
}

fn single_abstract(class: &Class, equals_is_abstract: bool, both_concrete: bool) -> Error {
    let (abstract_method, concrete_method) = if equals_is_abstract {
        ("equals", "hash")
    } else {
        ("hash", "equals")
    };
    let advice = if both_concrete {
        "Both should be concrete."
    } else {
        "Both should be either abstract or concrete."
    };
    Violation::new(
        Category::AbstractDelegation,
        format!(
            "{}'s {} method is abstract, but {} is not.\n{}",
            class.name(),
            abstract_method,
            concrete_method,
            advice
        ),
    )
    .into()
}
