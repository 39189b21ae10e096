// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-field checks, each run against fresh red instances.
//!
//! Checks that toggle a field skip fields whose type has a single value:
//! there is nothing to toggle them to.

mod array;
mod float;
mod mutability;
mod reflexivity;
mod significant;
mod symmetry;
mod transitivity;

use std::fmt;

use tracing::debug;

use crate::access::ObjectAccessor;
use crate::config::Warning;
use crate::error::{Category, Result, Violation};
use crate::model::FieldRef;

use super::inspector::FieldInspector;
use super::Context;

/// One per-field check of the `Fields` stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCheck {
    Array,
    Float,
    Reflexivity,
    Mutability,
    SignificantFields,
    Symmetry,
    Transitivity,
}

impl FieldCheck {
    /// Execution order.
    pub const ORDER: [FieldCheck; 7] = [
        FieldCheck::Array,
        FieldCheck::Float,
        FieldCheck::Reflexivity,
        FieldCheck::Mutability,
        FieldCheck::SignificantFields,
        FieldCheck::Symmetry,
        FieldCheck::Transitivity,
    ];

    /// The check moves a field to its other prefab value.
    pub fn toggles(self) -> bool {
        !matches!(
            self,
            FieldCheck::Array | FieldCheck::Float | FieldCheck::Reflexivity
        )
    }

    fn applies(self, ctx: &Context<'_>) -> bool {
        let class = ctx.class();
        match self {
            FieldCheck::Array | FieldCheck::Float | FieldCheck::Reflexivity => {
                class.declares_equals()
            }
            FieldCheck::Mutability => {
                !ctx.suppressed(Warning::NonfinalFields)
                    && !(ctx.honours_markers() && class.is_immutable())
            }
            _ => true,
        }
    }

    fn run(
        self,
        ctx: &Context<'_>,
        field: FieldRef,
        reference: &mut ObjectAccessor,
        changed: &mut ObjectAccessor,
    ) -> Result<()> {
        match self {
            FieldCheck::Array => array::check(field, reference, changed),
            FieldCheck::Float => float::check(field, reference, changed),
            FieldCheck::Reflexivity => reflexivity::check(ctx, field, reference, changed),
            FieldCheck::Mutability => mutability::check(ctx, field, reference, changed),
            FieldCheck::SignificantFields => significant::check(ctx, field, reference, changed),
            FieldCheck::Symmetry => symmetry::check(ctx, field, reference, changed),
            FieldCheck::Transitivity => transitivity::check(ctx, field, reference, changed),
        }
    }
}

impl fmt::Display for FieldCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

pub(crate) fn check(ctx: &Context<'_>) -> Result<()> {
    let class = ctx.class();
    if ctx.config.requires_all_fields() && class.is_equals_inherited_from_root() {
        return Err(Violation::new(
            Category::SignificantFields,
            format!(
                "all fields should be used, but {} has not defined an equals method.",
                class.name()
            ),
        )
        .into());
    }
    let inspector = FieldInspector::new(ctx);
    for check in FieldCheck::ORDER {
        if !check.applies(ctx) {
            continue;
        }
        debug!(check = %check, class = class.name(), "running field check");
        inspector.check(check.toggles(), |field, reference, changed| {
            check.run(ctx, field, reference, changed)
        })?;
    }
    Ok(())
}
