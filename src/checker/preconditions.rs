// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sanity of caller-supplied examples, before they are trusted.

use crate::error::{Category, Result};
use crate::formatter::show;
use crate::invoke;
use crate::model::Object;

use super::examples::is_identical;
use super::{ensure, Context};

pub(crate) fn check(ctx: &Context<'_>) -> Result<()> {
    let class = ctx.class();
    for example in ctx.all_examples() {
        ensure(example.is_instance_of(class), Category::Precondition, || {
            format!(
                "\n  {}\nand an instance of\n  {}\nare of different classes",
                show(&**example),
                class.name()
            )
        })?;
    }
    check_equal_group(ctx, &ctx.equal_examples)?;
    check_unequal_group(ctx, &ctx.unequal_examples)?;
    for a in &ctx.equal_examples {
        for b in &ctx.unequal_examples {
            let identical = is_identical(ctx, &**a, &**b)?;
            ensure(!identical, Category::Precondition, || {
                format!(
                    "the same object appears in both the equal and unequal examples:\n  {}",
                    show(&**a)
                )
            })?;
        }
    }
    Ok(())
}

fn check_equal_group(ctx: &Context<'_>, examples: &[Box<dyn Object>]) -> Result<()> {
    for (i, a) in examples.iter().enumerate() {
        for b in &examples[i + 1..] {
            let (a, b) = (&**a, &**b);
            ensure(!is_identical(ctx, a, b)?, Category::Precondition, || {
                format!("two identical objects appear:\n  {}", show(a))
            })?;
            ensure(invoke::equals(a, b)?, Category::Precondition, || {
                format!(
                    "not all equal objects are equal:\n  {}\nand\n  {}",
                    show(a),
                    show(b)
                )
            })?;
        }
    }
    Ok(())
}

fn check_unequal_group(ctx: &Context<'_>, examples: &[Box<dyn Object>]) -> Result<()> {
    for (i, a) in examples.iter().enumerate() {
        for b in &examples[i + 1..] {
            let (a, b) = (&**a, &**b);
            ensure(!is_identical(ctx, a, b)?, Category::Precondition, || {
                format!("the same object appears twice:\n  {}", show(a))
            })?;
            ensure(!invoke::equals(a, b)?, Category::Precondition, || {
                format!(
                    "two objects are equal to each other:\n  {}\nand\n  {}",
                    show(a),
                    show(b)
                )
            })?;
        }
    }
    Ok(())
}
